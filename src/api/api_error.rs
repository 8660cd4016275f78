use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    /// Transport-level failure: DNS, connect, timeout, broken body.
    Network(String),
    /// The API answered with a non-success status. Carries the server's
    /// message when the body had one.
    Http { status: u16, message: String },
    /// The response body did not decode into the expected shape.
    Decode(String),
    /// A payload could not be assembled (bad part MIME, invalid URL).
    Request(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {msg}"),
            ApiError::Http { status, message } => write!(f, "API returned {status}: {message}"),
            ApiError::Decode(msg) => write!(f, "Response decode error: {msg}"),
            ApiError::Request(msg) => write!(f, "Request build error: {msg}"),
        }
    }
}

impl Error for ApiError {}
