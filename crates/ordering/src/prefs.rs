//! Key-value persistence port for session state.
//!
//! The ordering core never touches device storage directly; the platform
//! layer injects an implementation of [`PreferenceStore`] and the session
//! gate reads and writes through it. The surface mirrors a mobile
//! preferences store: typed getters that miss as `None`, fire-and-forget
//! puts, and a wholesale `clear_all` for logout.

use std::collections::HashMap;

/// Persistence surface for small session flags and profile fields.
pub trait PreferenceStore {
    /// Read a boolean, `None` when the key has never been written.
    fn get_bool(&self, key: &str) -> Option<bool>;

    /// Read a string, `None` when the key has never been written.
    fn get_string(&self, key: &str) -> Option<String>;

    /// Write a boolean.
    fn put_bool(&mut self, key: &str, value: bool);

    /// Write a string.
    fn put_string(&mut self, key: &str, value: &str);

    /// Remove every stored key. Used on logout.
    fn clear_all(&mut self);
}

/// In-memory store for tests and the CLI; contents die with the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    bools: HashMap<String, bool>,
    strings: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bools.is_empty() && self.strings.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.bools.get(key).copied()
    }

    fn get_string(&self, key: &str) -> Option<String> {
        self.strings.get(key).cloned()
    }

    fn put_bool(&mut self, key: &str, value: bool) {
        self.bools.insert(key.to_string(), value);
    }

    fn put_string(&mut self, key: &str, value: &str) {
        self.strings.insert(key.to_string(), value.to_string());
    }

    fn clear_all(&mut self) {
        self.bools.clear();
        self.strings.clear();
    }
}
