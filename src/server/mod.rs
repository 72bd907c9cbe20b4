//! Server core functionality
//!
//! Contains the main server implementation and shared application state.

pub mod core;

pub use core::{AppState, Server};
