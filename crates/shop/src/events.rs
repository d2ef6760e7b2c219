//! User actions and change notifications.
//!
//! The UI only ever sends these events; all state changes happen in the
//! handlers registered by `ShopPlugin`.

use bevy::prelude::*;

use crate::category_filter::CategoryChoice;

/// A menu item's "Add" control was pressed. Name and price are the raw
/// text attached to the control and are validated before the dialog opens.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct AddToCartRequested {
    pub name: Option<String>,
    pub price: Option<String>,
}

/// The customization dialog was submitted.
#[derive(Event, Debug, Clone, Copy)]
pub struct SubmitCustomization;

/// The customization dialog was dismissed.
#[derive(Event, Debug, Clone, Copy)]
pub struct CancelCustomization;

/// A remove control was pressed on the given rendered row.
#[derive(Event, Debug, Clone, Copy)]
pub struct RemoveCartItem {
    pub row: usize,
}

/// Cart panel controls. Toggle and close share one event so that they
/// apply in the order they were pressed.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartPanelAction {
    Toggle,
    Close,
}

#[derive(Event, Debug, Clone, PartialEq)]
pub struct CategorySelected(pub CategoryChoice);

/// Sent after every cart mutation so the stored copy can be rewritten.
#[derive(Event, Debug, Clone, Copy)]
pub struct CartChanged;
