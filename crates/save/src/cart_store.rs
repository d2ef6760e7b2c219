//! Cart encoding on top of a [`KeyValueStore`].
//!
//! The whole cart lives under one key as a JSON array of
//! `{"name": ..., "price": ...}` records and is rewritten in full on every
//! save.

use bevy::prelude::*;
use shop::config::CART_STORAGE_KEY;
use shop::{Cart, LineItem};

use crate::key_value_store::KeyValueStore;
use crate::save_error::SaveError;

/// Parses stored cart text.
pub fn decode_cart(text: &str) -> Result<Cart, SaveError> {
    let items: Vec<LineItem> = serde_json::from_str(text)?;
    Ok(Cart::from_items(items))
}

pub fn encode_cart(cart: &Cart) -> Result<String, SaveError> {
    serde_json::to_string(cart.items()).map_err(|e| SaveError::Encode(e.to_string()))
}

/// Reads the stored cart. A missing key, an unreachable store or text that
/// is not a list of line items all yield an empty cart; problems are logged.
pub fn load_cart(store: &dyn KeyValueStore) -> Cart {
    let text = match store.get(CART_STORAGE_KEY) {
        Ok(Some(text)) => text,
        Ok(None) => return Cart::default(),
        Err(e) => {
            warn!("Cart load failed, starting empty: {e}");
            return Cart::default();
        }
    };
    match decode_cart(&text) {
        Ok(cart) => cart,
        Err(e) => {
            warn!(
                "Stored cart ({} bytes) is unreadable, starting empty: {e}",
                text.len()
            );
            Cart::default()
        }
    }
}

/// Replaces the stored cart with `cart`.
pub fn save_cart(store: &mut dyn KeyValueStore, cart: &Cart) -> Result<(), SaveError> {
    let text = encode_cart(cart)?;
    store.set(CART_STORAGE_KEY, &text)
}
