pub mod auth;
pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod session;

pub use config::ServerConfig;
pub use server::Server;
