//! Session registry
//!
//! HTTP is stateless, so each client context is keyed by an opaque random
//! token carried in a cookie. The registry maps token -> SessionGate;
//! nothing about a session ever leaves the server but the token itself.
//!
//! No expiry and no rotation: sessions live until logged out or the
//! process stops.

use std::collections::HashMap;

use rand::distr::Alphanumeric;
use rand::Rng;

use crate::error::AuthError;

use super::gate::SessionGate;

const TOKEN_LENGTH: usize = 32;

/// Mints a fresh alphanumeric session token.
fn mint_token() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

/// Maps session tokens to per-client session gates.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<String, SessionGate>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    /// Establishes a new session for the identity and returns its token.
    pub fn open(&mut self, identity: &str) -> String {
        let token = mint_token();
        let mut gate = SessionGate::new();
        gate.establish(identity);
        self.sessions.insert(token.clone(), gate);
        token
    }

    /// Returns the identity behind a token, if the session is active.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.sessions.get(token).and_then(|gate| gate.current())
    }

    /// Returns the identity behind a token, or fails if there is no
    /// active session for it.
    pub fn require(&self, token: &str) -> Result<&str, AuthError> {
        match self.sessions.get(token) {
            Some(gate) => gate.require(),
            None => Err(AuthError::NotLoggedIn),
        }
    }

    /// Clears and drops the session for a token. Unknown tokens are a no-op.
    pub fn close(&mut self, token: &str) {
        if let Some(mut gate) = self.sessions.remove(token) {
            gate.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_resolve() {
        let mut registry = SessionRegistry::new();
        let token = registry.open("alice@example.com");
        assert_eq!(token.len(), TOKEN_LENGTH);
        assert_eq!(registry.resolve(&token), Some("alice@example.com"));
        assert_eq!(registry.require(&token).unwrap(), "alice@example.com");
    }

    #[test]
    fn test_unknown_token_fails_require() {
        let registry = SessionRegistry::new();
        assert_eq!(
            registry.require("no-such-token").unwrap_err(),
            AuthError::NotLoggedIn
        );
        assert_eq!(registry.resolve("no-such-token"), None);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut registry = SessionRegistry::new();
        let token = registry.open("alice@example.com");
        registry.close(&token);
        assert_eq!(registry.require(&token).unwrap_err(), AuthError::NotLoggedIn);
        // Closing again is fine
        registry.close(&token);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_tokens_are_distinct() {
        let mut registry = SessionRegistry::new();
        let a = registry.open("alice@example.com");
        let b = registry.open("alice@example.com");
        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
    }
}
