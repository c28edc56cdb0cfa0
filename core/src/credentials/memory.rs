//! In-memory credential store

use std::sync::RwLock;

use crate::credentials::CredentialStore;

/// Process-local credential store backed by a `RwLock`
///
/// This is the production store for the SDK (the hosting application decides
/// whether to persist the token elsewhere) and doubles as the test store.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: RwLock<Option<String>>,
}

impl MemoryCredentialStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with a token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Option<String> {
        self.token.read().expect("credential lock poisoned").clone()
    }

    fn set(&self, token: &str) {
        *self.token.write().expect("credential lock poisoned") = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.write().expect("credential lock poisoned") = None;
    }
}
