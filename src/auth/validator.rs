//! Authentication validator
//!
//! Implements registration and login validation over the credential store.
//! Input sanitation mirrors what the HTTP form layer can feed us: empty
//! fields, oversized fields, and control characters are rejected up front.

use crate::config::ServerConfig;
use crate::error::AuthError;

use super::store::CredentialStore;

/// Performs basic input sanitation on a submitted form field.
fn is_valid_input(input: &str, max_length: usize) -> bool {
    !input.trim().is_empty() && input.len() <= max_length && !input.contains(['\r', '\n', '\0'])
}

/// Validates registration input, then inserts the account.
///
/// Both fields must be non-empty and within the configured length caps.
pub fn register(
    store: &mut CredentialStore,
    identity: &str,
    password: &str,
    config: &ServerConfig,
) -> Result<(), AuthError> {
    if !is_valid_input(identity, config.max_identity_length) {
        return Err(AuthError::Validation("Invalid identity format".into()));
    }

    if !is_valid_input(password, config.max_password_length) {
        return Err(AuthError::Validation("Invalid password format".into()));
    }

    store.register(identity, password)
}

/// Validates login credentials against the store.
///
/// Empty or malformed input short-circuits to `InvalidCredentials` without
/// touching the store, so malformed and unknown logins look identical.
pub fn authenticate(
    store: &CredentialStore,
    identity: &str,
    password: &str,
    config: &ServerConfig,
) -> Result<(), AuthError> {
    if !is_valid_input(identity, config.max_identity_length)
        || !is_valid_input(password, config.max_password_length)
    {
        return Err(AuthError::InvalidCredentials);
    }

    store.verify(identity, password)
}
