use std::env;
use std::fmt;

pub const DEFAULT_API_BASE: &str = "https://api.real-estate-manager.redberryinternship.ge/api";
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_DRAFTS_DB: &str = "drafts.sqlite3";

/// Runtime configuration, resolved once at startup and passed into the
/// server context. The bearer token is deliberately not a module constant:
/// every component that talks to the remote API receives it through here.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base: String,
    pub api_token: String,
    pub bind_addr: String,
    pub drafts_db: String,
    /// Whether the listing form keeps a draft of its text fields across
    /// visits. The agent form never drafts.
    pub persist_drafts: bool,
}

#[derive(Debug)]
pub struct ConfigError(pub String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Config error: {}", self.0)
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_token = env::var("ESTATE_API_TOKEN")
            .map_err(|_| ConfigError("ESTATE_API_TOKEN environment variable not set".into()))?;

        Ok(AppConfig {
            api_base: env::var("ESTATE_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.into()),
            api_token,
            bind_addr: env::var("ESTATE_BIND").unwrap_or_else(|_| DEFAULT_BIND.into()),
            drafts_db: env::var("ESTATE_DRAFTS_DB").unwrap_or_else(|_| DEFAULT_DRAFTS_DB.into()),
            persist_drafts: env::var("ESTATE_PERSIST_DRAFTS")
                .map(|v| v != "0" && v != "false")
                .unwrap_or(true),
        })
    }
}
