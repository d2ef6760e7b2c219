pub mod cart_store;
#[cfg(not(target_arch = "wasm32"))]
pub mod file_store;
pub mod key_value_store;
#[cfg(target_arch = "wasm32")]
pub mod local_store;
pub mod memory_store;
mod save_error;
mod save_plugin;

#[cfg(test)]
mod persistence_tests;

pub use key_value_store::{CartStorage, KeyValueStore};
pub use memory_store::MemoryStore;
pub use save_error::SaveError;
pub use save_plugin::SavePlugin;
#[cfg(not(target_arch = "wasm32"))]
pub use save_plugin::DATA_DIR_ENV;
