//! Display model of the cart.
//!
//! The view is rebuilt from scratch from the [`Cart`] whenever the cart
//! changes. Each row remembers the cart index it was built from, so a remove
//! control only has to report which row was clicked.

use bevy::prelude::*;

use crate::cart::{format_money, Cart};

#[derive(Debug, Clone, PartialEq)]
pub struct CartRow {
    /// `"<name> - $<price>"`.
    pub label: String,
    pub price: String,
    /// Position of the item in the cart at the time of the last rebuild.
    pub index: usize,
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CartView {
    pub rows: Vec<CartRow>,
    pub total: String,
    pub count: String,
}

impl Default for CartView {
    fn default() -> Self {
        Self::build(&Cart::default())
    }
}

impl CartView {
    pub fn build(cart: &Cart) -> Self {
        let rows = cart
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let price = item.price_label();
                CartRow {
                    label: format!("{} - ${price}", item.name),
                    price,
                    index,
                }
            })
            .collect();
        Self {
            rows,
            total: format_money(cart.total()),
            count: cart.count().to_string(),
        }
    }

    /// Cart index behind a rendered row; `None` for rows that do not exist.
    pub fn index_of_row(&self, row: usize) -> Option<usize> {
        self.rows.get(row).map(|r| r.index)
    }
}

/// Rebuilds the view after the cart changed.
pub(crate) fn refresh_cart_view(cart: Res<Cart>, mut view: ResMut<CartView>) {
    *view = CartView::build(&cart);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_item::LineItem;

    fn cart() -> Cart {
        Cart::from_items(vec![
            LineItem::new("Milk Tea (Regular, Whole, 100%)", 2.5),
            LineItem::new("Taro (Large, Oat, 50%) + Pearl x1", 3.75),
        ])
    }

    #[test]
    fn test_one_row_per_item_in_order() {
        let view = CartView::build(&cart());
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].label, "Milk Tea (Regular, Whole, 100%) - $2.50");
        assert_eq!(view.rows[1].price, "3.75");
        assert_eq!(view.rows[1].index, 1);
    }

    #[test]
    fn test_total_and_count() {
        let view = CartView::build(&cart());
        assert_eq!(view.total, "6.25");
        assert_eq!(view.count, "2");
    }

    #[test]
    fn test_empty_cart_view() {
        let view = CartView::default();
        assert!(view.rows.is_empty());
        assert_eq!(view.total, "0.00");
        assert_eq!(view.count, "0");
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let cart = cart();
        assert_eq!(CartView::build(&cart), CartView::build(&cart));
    }

    #[test]
    fn test_index_of_row() {
        let view = CartView::build(&cart());
        assert_eq!(view.index_of_row(1), Some(1));
        assert_eq!(view.index_of_row(2), None);
    }
}
