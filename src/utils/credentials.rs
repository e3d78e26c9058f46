//! API credential sources
//!
//! Credentials are looked up by variable name on every resolution, never
//! cached, so a rotated key is picked up by the next request.
//! - `EnvCredentials`: the process environment
//! - `StaticCredentials`: an in-memory map for embedding and tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Trait for credential lookups - allows substituting fake keys in tests
pub trait CredentialSource: Send + Sync {
    /// Returns `None` when the variable is absent and `Some("")` when it is set but empty
    fn get_credential(&self, name: &str) -> Option<String>;

    fn has_credential(&self, name: &str) -> bool {
        self.get_credential(name).is_some()
    }
}

/// Reads credentials from the process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentials;

impl EnvCredentials {
    pub fn new() -> Self {
        Self
    }
}

impl CredentialSource for EnvCredentials {
    fn get_credential(&self, name: &str) -> Option<String> {
        std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }
}

/// In-memory credential store
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl StaticCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(self, name: &str, value: &str) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&self, name: &str, value: &str) {
        self.values
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(name.to_string(), value.to_string());
    }

    pub fn remove(&self, name: &str) {
        self.values
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(name);
    }
}

impl CredentialSource for StaticCredentials {
    fn get_credential(&self, name: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(name)
            .cloned()
    }
}
