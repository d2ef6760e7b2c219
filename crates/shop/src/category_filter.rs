//! Category filter over the menu.
//!
//! Exactly one category button is active at a time. The filter only decides
//! visibility; the menu itself is never changed.

use bevy::prelude::*;

use crate::config::ALL_CATEGORY;
use crate::menu::{Menu, MenuItem};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryChoice {
    #[default]
    All,
    Tag(String),
}

impl CategoryChoice {
    /// Maps a button's category tag; `"all"` selects every item.
    pub fn from_tag(tag: &str) -> Self {
        if tag == ALL_CATEGORY {
            CategoryChoice::All
        } else {
            CategoryChoice::Tag(tag.to_string())
        }
    }

    /// Button caption, e.g. `"All"` or `"Milk Tea"` for `milk-tea`.
    pub fn label(&self) -> String {
        match self {
            CategoryChoice::All => "All".to_string(),
            CategoryChoice::Tag(tag) => tag
                .split('-')
                .filter(|word| !word.is_empty())
                .map(|word| {
                    let mut chars = word.chars();
                    match chars.next() {
                        Some(first) => first.to_uppercase().chain(chars).collect(),
                        None => String::new(),
                    }
                })
                .collect::<Vec<String>>()
                .join(" "),
        }
    }
}

/// The active category button.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct CategoryFilter {
    pub active: CategoryChoice,
}

impl CategoryFilter {
    /// Activates `choice`; every other button becomes inactive.
    pub fn select(&mut self, choice: CategoryChoice) {
        self.active = choice;
    }

    pub fn is_active(&self, choice: &CategoryChoice) -> bool {
        &self.active == choice
    }

    pub fn shows(&self, item: &MenuItem) -> bool {
        match &self.active {
            CategoryChoice::All => true,
            CategoryChoice::Tag(tag) => &item.category == tag,
        }
    }

    pub fn visible_items<'a>(&'a self, menu: &'a Menu) -> impl Iterator<Item = &'a MenuItem> + 'a {
        menu.items.iter().filter(move |item| self.shows(item))
    }
}

/// `All`, then each distinct category in catalog order.
pub fn category_buttons(menu: &Menu) -> Vec<CategoryChoice> {
    let mut buttons = vec![CategoryChoice::All];
    for item in &menu.items {
        let choice = CategoryChoice::from_tag(&item.category);
        if !buttons.contains(&choice) {
            buttons.push(choice);
        }
    }
    buttons
}
