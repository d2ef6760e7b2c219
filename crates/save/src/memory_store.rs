use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::key_value_store::KeyValueStore;
use crate::save_error::SaveError;

/// In-memory store. Clones share the same map, so a test can keep a handle
/// after moving the store into an app and hand it to a second app to
/// simulate a restart.
#[derive(Clone, Default)]
pub struct MemoryStore(Arc<Mutex<HashMap<String, String>>>);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current raw value under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.0.lock().ok()?.get(key).cloned()
    }

    /// Writes `value` directly, bypassing the cart encoder.
    pub fn put_raw(&self, key: &str, value: &str) {
        if let Ok(mut map) = self.0.lock() {
            map.insert(key.to_string(), value.to_string());
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SaveError> {
        let map = self
            .0
            .lock()
            .map_err(|e| SaveError::Unavailable(e.to_string()))?;
        Ok(map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SaveError> {
        let mut map = self
            .0
            .lock()
            .map_err(|e| SaveError::Unavailable(e.to_string()))?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
