//! In-memory cart state.
//!
//! The cart is an ordered list of [`LineItem`]s. Insertion order is display
//! order, and a row's position is the index used for removal. Persistence
//! lives in the `save` crate; every mutation here is followed by a
//! `CartChanged` event so the stored copy is rewritten in the same frame.

use bevy::prelude::*;

use crate::line_item::LineItem;

#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn from_items(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all line item prices.
    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

    pub fn append(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Removes the item at `index`. Out-of-range indices leave the cart
    /// untouched and return `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<LineItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }
}

/// Formats a currency amount with exactly two decimals.
pub fn format_money(amount: f64) -> String {
    format!("{amount:.2}")
}
