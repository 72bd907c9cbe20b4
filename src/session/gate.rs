//! Per-client session state
//!
//! A single-slot gate tying one client context to at most one identity.
//! Two states: anonymous and authenticated. Establishing while already
//! authenticated silently replaces the identity; clearing is idempotent.

use crate::error::AuthError;

/// Authentication state for one client context.
#[derive(Debug, Default)]
pub struct SessionGate {
    identity: Option<String>,
}

impl SessionGate {
    pub fn new() -> Self {
        Self { identity: None }
    }

    /// Unconditionally sets the active identity, replacing any prior one.
    pub fn establish(&mut self, identity: &str) {
        self.identity = Some(identity.to_string());
    }

    /// Returns the active identity, if any.
    pub fn current(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    /// Removes the active identity. Clearing an empty gate is not an error.
    pub fn clear(&mut self) {
        self.identity = None;
    }

    /// Returns the active identity, or fails if the client is anonymous.
    ///
    /// Used to gate the protected dashboard.
    pub fn require(&self) -> Result<&str, AuthError> {
        self.identity.as_deref().ok_or(AuthError::NotLoggedIn)
    }
}
