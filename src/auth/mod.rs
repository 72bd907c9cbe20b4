//! Authentication system
//!
//! Handles account registration, credential validation, and the in-memory
//! credential store.

pub mod store;
pub mod validator;

pub use store::{Account, CredentialStore, DEFAULT_ROLE};
pub use validator::{authenticate, register};
