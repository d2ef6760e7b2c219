//! Static drink catalog.
//!
//! The menu is read-only to the cart: items are shown, filtered and picked,
//! never edited.

use bevy::prelude::*;

use crate::events::AddToCartRequested;

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub name: String,
    pub price: f64,
    pub category: String,
}

impl MenuItem {
    pub fn new(name: &str, price: f64, category: &str) -> Self {
        Self {
            name: name.to_string(),
            price,
            category: category.to_string(),
        }
    }

    /// The request an "Add" control sends for this item. Name and price
    /// travel as text; the price keeps full precision.
    pub fn add_request(&self) -> AddToCartRequested {
        AddToCartRequested {
            name: Some(self.name.clone()),
            price: Some(self.price.to_string()),
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct Menu {
    pub items: Vec<MenuItem>,
    pub toppings: Vec<String>,
}

impl Default for Menu {
    fn default() -> Self {
        Self {
            items: vec![
                MenuItem::new("Milk Tea", 2.50, "milk-tea"),
                MenuItem::new("Taro Milk Tea", 3.25, "milk-tea"),
                MenuItem::new("Brown Sugar Milk Tea", 3.75, "milk-tea"),
                MenuItem::new("Passion Fruit Green Tea", 3.00, "fruit-tea"),
                MenuItem::new("Mango Jasmine Tea", 3.25, "fruit-tea"),
                MenuItem::new("Lychee Oolong", 3.50, "fruit-tea"),
                MenuItem::new("Iced Latte", 3.50, "coffee"),
                MenuItem::new("Coffee Milk Tea", 3.75, "coffee"),
                MenuItem::new("Strawberry Slush", 4.00, "slush"),
                MenuItem::new("Matcha Slush", 4.25, "slush"),
            ],
            toppings: ["Pearl", "Jelly", "Boba", "Pudding", "Red Bean"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}
