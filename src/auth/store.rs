//! Credential storage and management
//!
//! In-memory account store, insert-only for the life of the process.
//! Passwords are held verbatim and compared byte-for-byte; this is a known
//! weakness carried over from the original behavior, not an oversight.

use std::collections::HashMap;

use crate::error::AuthError;

/// Role assigned to every account; the caller cannot influence this value.
pub const DEFAULT_ROLE: &str = "user";

/// A stored account record
#[derive(Debug, Clone)]
pub struct Account {
    password: String,
    role: String,
}

impl Account {
    pub fn role(&self) -> &str {
        &self.role
    }
}

/// In-memory credential store mapping identity (email) to account.
///
/// Owned state rather than a process-global so tests get fresh instances.
/// Identities are unique and immutable once inserted; there is no update,
/// delete, or enumeration.
#[derive(Debug, Default)]
pub struct CredentialStore {
    accounts: HashMap<String, Account>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
        }
    }

    /// Inserts a new account with the fixed default role.
    ///
    /// Fails with `DuplicateIdentity` if the identity is already present;
    /// the existing account is left untouched.
    pub fn register(&mut self, identity: &str, password: &str) -> Result<(), AuthError> {
        if self.accounts.contains_key(identity) {
            return Err(AuthError::DuplicateIdentity(identity.to_string()));
        }

        self.accounts.insert(
            identity.to_string(),
            Account {
                password: password.to_string(),
                role: DEFAULT_ROLE.to_string(),
            },
        );
        Ok(())
    }

    /// Checks the given password against the stored one, byte-exact.
    ///
    /// Unknown identity and password mismatch return the same error so the
    /// boundary cannot distinguish them.
    pub fn verify(&self, identity: &str, password: &str) -> Result<(), AuthError> {
        match self.accounts.get(identity) {
            Some(account) if account.password == password => Ok(()),
            Some(_) => Err(AuthError::InvalidCredentials),
            None => Err(AuthError::InvalidCredentials),
        }
    }

    /// Returns the account for an identity, if registered.
    pub fn get(&self, identity: &str) -> Option<&Account> {
        self.accounts.get(identity)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
