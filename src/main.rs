use crate::api::EstateClient;
use crate::config::AppConfig;
use crate::db::connection::{init_db, Database};
use crate::responses::html_error_response;
use crate::router::{handle, AppCtx};
use astra::Server;
use std::net::SocketAddr;
use std::sync::Arc;

mod api;
mod config;
mod db;
mod domain;
mod errors;
mod forms;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    // Draft store lives in a local SQLite file
    let db = Database::new(cfg.drafts_db.as_str());
    if let Err(e) = init_db(&db, "sql/schema.sql") {
        eprintln!("❌ Database initialization failed: {e}");
        std::process::exit(1);
    }

    let api = match EstateClient::new(&cfg) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("❌ API client initialization failed: {e}");
            std::process::exit(1);
        }
    };

    let addr: SocketAddr = match cfg.bind_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            eprintln!("❌ Bad bind address {:?}: {e}", cfg.bind_addr);
            std::process::exit(1);
        }
    };

    println!("Starting server at http://{addr}");
    println!("Remote listings API: {}", cfg.api_base);

    let ctx = Arc::new(AppCtx {
        api: Box::new(api),
        db,
        persist_drafts: cfg.persist_drafts,
    });

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &ctx) {
        Ok(resp) => resp,
        Err(err) => html_error_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
