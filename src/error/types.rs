//! Error types
//!
//! Defines domain-specific error types for each module of the server.

use std::fmt;
use std::io;

/// Authentication and session errors
#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    /// A required field was missing or malformed
    Validation(String),
    /// Registration attempted with an identity that already exists
    DuplicateIdentity(String),
    /// Unknown identity or password mismatch (deliberately indistinct)
    InvalidCredentials,
    /// Protected resource accessed without an active session
    NotLoggedIn,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Validation(s) => write!(f, "Validation failed: {}", s),
            AuthError::DuplicateIdentity(id) => write!(f, "Identity already registered: {}", id),
            AuthError::InvalidCredentials => write!(f, "Invalid credentials"),
            AuthError::NotLoggedIn => write!(f, "User not logged in"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Top-level server errors
#[derive(Debug)]
pub enum ServerError {
    Auth(AuthError),
    Config(config::ConfigError),
    IoError(io::Error),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Auth(e) => write!(f, "Authentication error: {}", e),
            ServerError::Config(e) => write!(f, "Configuration error: {}", e),
            ServerError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<AuthError> for ServerError {
    fn from(error: AuthError) -> Self {
        ServerError::Auth(error)
    }
}

impl From<config::ConfigError> for ServerError {
    fn from(error: config::ConfigError) -> Self {
        ServerError::Config(error)
    }
}

impl From<io::Error> for ServerError {
    fn from(error: io::Error) -> Self {
        ServerError::IoError(error)
    }
}
