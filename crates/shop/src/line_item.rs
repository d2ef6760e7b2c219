use serde::{Deserialize, Serialize};

use crate::cart::format_money;

/// One customized drink in the cart.
///
/// `name` already carries the chosen options (size, milk, sweetness,
/// toppings, note) and `price` already includes topping surcharges, so the
/// cart never needs to look back at the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub price: f64,
}

impl LineItem {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Price with exactly two decimals, e.g. `"4.50"`.
    pub fn price_label(&self) -> String {
        format_money(self.price)
    }
}
