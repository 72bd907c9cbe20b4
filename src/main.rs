//! Gatehouse - Entry Point
//!
//! A small web server for user registration, login, and session-gated
//! access to a dashboard.

use env_logger;
use log::{error, info};

use gatehouse::{Server, ServerConfig};

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    info!("Launching Gatehouse...");

    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    match Server::new(config).await {
        Ok(server) => server.start().await,
        Err(e) => {
            error!("Server startup failed: {}", e);
            std::process::exit(1);
        }
    }
}
