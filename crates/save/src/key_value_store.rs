use bevy::prelude::*;

use crate::save_error::SaveError;

/// A persistent string key-value store, the shape of a browser's
/// `localStorage`.
pub trait KeyValueStore: Send + Sync + 'static {
    /// Returns the stored value, or `None` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, SaveError>;

    /// Replaces the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), SaveError>;
}

/// The store the cart is loaded from and saved to.
///
/// Insert this before adding `SavePlugin` to choose the backend; otherwise
/// the plugin uses the platform default.
#[derive(Resource)]
pub struct CartStorage(pub Box<dyn KeyValueStore>);

impl CartStorage {
    pub fn new(store: impl KeyValueStore) -> Self {
        Self(Box::new(store))
    }
}
