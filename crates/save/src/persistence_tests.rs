//! Persistence tests: `TestShop` + `SavePlugin` over a shared `MemoryStore`.
//!
//! Building a second shop over the same store simulates a restart.

use bevy::prelude::*;
use shop::config::CART_STORAGE_KEY;
use shop::test_harness::TestShop;
use shop::Cart;

use crate::cart_store::decode_cart;
use crate::key_value_store::{CartStorage, KeyValueStore};
use crate::memory_store::MemoryStore;
use crate::save_error::SaveError;
use crate::SavePlugin;

fn shop_over(store: &MemoryStore) -> TestShop {
    let store = store.clone();
    TestShop::with_setup(move |app| {
        app.insert_resource(CartStorage::new(store));
        app.add_plugins(SavePlugin);
    })
}

fn stored_cart(store: &MemoryStore) -> Cart {
    let raw = store.raw(CART_STORAGE_KEY).expect("cart was saved");
    decode_cart(&raw).expect("stored cart decodes")
}

// =============================================================================
// Save after every mutation
// =============================================================================

#[test]
fn test_fresh_store_starts_empty() {
    let store = MemoryStore::new();
    let shop = shop_over(&store);
    assert!(shop.cart().is_empty());
    assert!(store.raw(CART_STORAGE_KEY).is_none());
}

#[test]
fn test_add_is_saved_in_same_frame() {
    let store = MemoryStore::new();
    let mut shop = shop_over(&store);
    shop.order("Milk Tea", "2.50", |form| form.set_topping("Pearl", "1"));

    assert_eq!(&stored_cart(&store), shop.cart());
}

#[test]
fn test_remove_is_saved() {
    let store = MemoryStore::new();
    let mut shop = shop_over(&store);
    shop.order("Milk Tea", "2.50", |_| {});
    shop.order("Iced Latte", "3.50", |_| {});
    shop.remove_row(0);

    let stored = stored_cart(&store);
    assert_eq!(&stored, shop.cart());
    assert_eq!(stored.count(), 1);
}

#[test]
fn test_out_of_range_remove_leaves_store_unchanged() {
    let store = MemoryStore::new();
    let mut shop = shop_over(&store);
    shop.order("Milk Tea", "2.50", |_| {});
    let before = store.raw(CART_STORAGE_KEY);

    shop.remove_row(5);
    assert_eq!(store.raw(CART_STORAGE_KEY), before);
}

#[test]
fn test_invalid_pick_and_cancel_do_not_write() {
    let store = MemoryStore::new();
    let mut shop = shop_over(&store);
    shop.pick("Milk Tea", "oops");
    shop.pick("Milk Tea", "2.50").cancel();
    shop.toggle_cart().select_category("coffee");
    assert!(store.raw(CART_STORAGE_KEY).is_none());
}

// =============================================================================
// Restart
// =============================================================================

#[test]
fn test_restart_restores_identical_cart() {
    let store = MemoryStore::new();
    let before = {
        let mut shop = shop_over(&store);
        shop.order("Milk Tea", "2.50", |form| {
            form.size = "Large".into();
            form.milk = "Oat".into();
            form.sweetness = "50%".into();
            form.set_topping("Boba", "3");
            form.notes = "less ice".into();
        });
        shop.order("Matcha Slush", "4.25", |_| {});
        shop.order("Taro Milk Tea", "3.25", |form| form.set_topping("Pudding", "2"));
        shop.cart().clone()
    };

    let restarted = shop_over(&store);
    assert_eq!(restarted.cart(), &before);
    assert_eq!(restarted.view().count, "3");
    assert_eq!(restarted.view().total, "12.50");
}

#[test]
fn test_restart_after_removing_everything() {
    let store = MemoryStore::new();
    {
        let mut shop = shop_over(&store);
        shop.order("Milk Tea", "2.50", |_| {});
        shop.remove_row(0);
    }
    assert!(shop_over(&store).cart().is_empty());
}

#[test]
fn test_corrupt_store_starts_empty_and_recovers() {
    let store = MemoryStore::new();
    store.put_raw(CART_STORAGE_KEY, "{definitely not a cart");

    let mut shop = shop_over(&store);
    assert!(shop.cart().is_empty());
    assert_eq!(shop.view().total, "0.00");

    shop.order("Iced Latte", "3.50", |_| {});
    assert_eq!(stored_cart(&store).count(), 1);
}

// =============================================================================
// Backend failures
// =============================================================================

/// A store whose writes always fail.
struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>, SaveError> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), SaveError> {
        Err(SaveError::Unavailable("read-only".to_string()))
    }
}

#[test]
fn test_failed_save_keeps_cart_usable() {
    let mut shop = TestShop::with_setup(|app| {
        app.insert_resource(CartStorage::new(ReadOnlyStore));
        app.add_plugins(SavePlugin);
    });
    shop.order("Milk Tea", "2.50", |_| {});
    shop.order("Iced Latte", "3.50", |_| {});
    assert_eq!(shop.cart().count(), 2);
    assert_eq!(shop.view().total, "6.00");
}

#[test]
fn test_plugin_loads_from_preinserted_storage() {
    let store = MemoryStore::new();
    store.put_raw(CART_STORAGE_KEY, r#"[{"name":"Taro","price":3.25}]"#);

    let shop = shop_over(&store);
    assert_eq!(shop.cart().count(), 1);
    assert_eq!(shop.view().rows[0].label, "Taro - $3.25");
    let raw = shop.resource::<CartStorage>().0.get(CART_STORAGE_KEY).unwrap();
    assert_eq!(raw.as_deref(), Some(r#"[{"name":"Taro","price":3.25}]"#));
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn test_file_store_survives_restart() {
    use crate::file_store::FileStore;

    let dir = std::env::temp_dir().join("teahouse_persistence_test_restart");
    let _ = std::fs::remove_dir_all(&dir);

    let file_shop = |dir: std::path::PathBuf| {
        TestShop::with_setup(move |app: &mut App| {
            app.insert_resource(CartStorage::new(FileStore::new(dir)));
            app.add_plugins(SavePlugin);
        })
    };

    {
        let mut shop = file_shop(dir.clone());
        shop.order("Lychee Oolong", "3.50", |form| form.notes = "no ice".into());
    }
    let restarted = file_shop(dir.clone());
    assert_eq!(
        restarted.cart().items()[0].name,
        "Lychee Oolong (Regular, Whole, 100%) | Note: no ice"
    );

    let _ = std::fs::remove_dir_all(&dir);
}
