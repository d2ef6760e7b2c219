//! Browser `localStorage` backend for WASM builds.
//!
//! The storage handle is looked up on every call instead of being held, so
//! the store stays `Send + Sync` like every other backend.

use web_sys::Storage;

use crate::key_value_store::KeyValueStore;
use crate::save_error::SaveError;

#[derive(Default)]
pub struct LocalStore;

fn local_storage() -> Result<Storage, SaveError> {
    let window =
        web_sys::window().ok_or_else(|| SaveError::Unavailable("no window".to_string()))?;
    window
        .local_storage()
        .map_err(|e| SaveError::Unavailable(format!("localStorage error: {e:?}")))?
        .ok_or_else(|| SaveError::Unavailable("localStorage not available".to_string()))
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, SaveError> {
        local_storage()?
            .get_item(key)
            .map_err(|e| SaveError::Unavailable(format!("getItem failed: {e:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SaveError> {
        local_storage()?.set_item(key, value).map_err(|e| {
            let text = format!("{e:?}");
            if text.contains("QuotaExceededError") {
                SaveError::Unavailable("storage full".to_string())
            } else {
                SaveError::Unavailable(format!("setItem failed: {text}"))
            }
        })
    }
}
