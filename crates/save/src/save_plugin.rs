use bevy::prelude::*;
use shop::{Cart, CartChanged, ShopSet};

use crate::cart_store::{load_cart, save_cart};
use crate::key_value_store::CartStorage;

/// Environment variable overriding the native data directory.
#[cfg(not(target_arch = "wasm32"))]
pub const DATA_DIR_ENV: &str = "TEAHOUSE_DATA_DIR";

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_DATA_DIR: &str = "teahouse_data";

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

/// Loads the cart at startup and rewrites the stored copy in the same frame
/// as every cart mutation.
pub struct SavePlugin;

impl Plugin for SavePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<CartStorage>() {
            app.insert_resource(default_storage());
        }

        app.add_systems(Startup, load_stored_cart);
        app.add_systems(Update, persist_cart.after(ShopSet::Input));
    }
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

fn load_stored_cart(storage: Res<CartStorage>, mut cart: ResMut<Cart>) {
    *cart = load_cart(&*storage.0);
    info!("Loaded cart with {} item(s)", cart.count());
}

/// Saves once per frame no matter how many mutations happened. Failures are
/// logged; the in-memory cart stays usable.
fn persist_cart(
    mut changes: EventReader<CartChanged>,
    mut storage: ResMut<CartStorage>,
    cart: Res<Cart>,
) {
    if changes.read().next().is_none() {
        return;
    }
    changes.read().for_each(drop);

    if let Err(e) = save_cart(&mut *storage.0, &cart) {
        error!("Cart save failed: {e}");
    }
}

// ---------------------------------------------------------------------------
// Utility
// ---------------------------------------------------------------------------

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn data_dir() -> std::path::PathBuf {
    std::env::var_os(DATA_DIR_ENV)
        .filter(|dir| !dir.is_empty())
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|| std::path::PathBuf::from(DEFAULT_DATA_DIR))
}

#[cfg(not(target_arch = "wasm32"))]
fn default_storage() -> CartStorage {
    let dir = data_dir();
    info!("Cart storage: {}", dir.display());
    CartStorage::new(crate::file_store::FileStore::new(dir))
}

#[cfg(target_arch = "wasm32")]
fn default_storage() -> CartStorage {
    CartStorage::new(crate::local_store::LocalStore)
}
