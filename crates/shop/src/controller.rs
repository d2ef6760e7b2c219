//! Event handlers: the only systems that mutate shop state.

use bevy::prelude::*;

use crate::cart::Cart;
use crate::cart_view::CartView;
use crate::category_filter::CategoryFilter;
use crate::customization::{Customization, Selection};
use crate::events::{
    AddToCartRequested, CancelCustomization, CartChanged, CartPanelAction, CategorySelected,
    RemoveCartItem, SubmitCustomization,
};
use crate::panel::CartPanel;

/// Starts the customization workflow for a picked drink. Invalid requests
/// are logged and leave the workflow idle.
pub(crate) fn handle_add_requests(
    mut requests: EventReader<AddToCartRequested>,
    mut customization: ResMut<Customization>,
) {
    for request in requests.read() {
        match Selection::parse(request.name.as_deref(), request.price.as_deref()) {
            Ok(selection) => {
                debug!(
                    "Customizing {} (base ${:.2})",
                    selection.drink, selection.base_price
                );
                customization.start(selection);
            }
            Err(e) => error!("{e}"),
        }
    }
}

pub(crate) fn handle_submissions(
    mut submissions: EventReader<SubmitCustomization>,
    mut customization: ResMut<Customization>,
    mut cart: ResMut<Cart>,
    mut changed: EventWriter<CartChanged>,
) {
    for _ in submissions.read() {
        let Some(item) = customization.submit() else {
            warn!("Customization submitted with no drink selected; ignoring");
            continue;
        };
        info!("Added to cart: {} (${})", item.name, item.price_label());
        cart.append(item);
        changed.send(CartChanged);
    }
}

pub(crate) fn handle_cancellations(
    mut cancellations: EventReader<CancelCustomization>,
    mut customization: ResMut<Customization>,
) {
    for _ in cancellations.read() {
        customization.cancel();
    }
}

/// Resolves the clicked row through the current view, removes that item
/// and rebuilds the view so the next click sees fresh row indices.
pub(crate) fn handle_removals(
    mut removals: EventReader<RemoveCartItem>,
    mut cart: ResMut<Cart>,
    mut view: ResMut<CartView>,
    mut changed: EventWriter<CartChanged>,
) {
    for removal in removals.read() {
        let Some(index) = view.index_of_row(removal.row) else {
            debug!("Remove ignored: no row {}", removal.row);
            continue;
        };
        if let Some(item) = cart.remove_at(index) {
            info!("Removed from cart: {}", item.name);
        }
        *view = CartView::build(&cart);
        changed.send(CartChanged);
    }
}

pub(crate) fn handle_panel_events(
    mut actions: EventReader<CartPanelAction>,
    mut panel: ResMut<CartPanel>,
) {
    for action in actions.read() {
        match action {
            CartPanelAction::Toggle => panel.toggle(),
            CartPanelAction::Close => panel.close(),
        }
    }
}

pub(crate) fn handle_category_selection(
    mut selections: EventReader<CategorySelected>,
    mut filter: ResMut<CategoryFilter>,
) {
    for CategorySelected(choice) in selections.read() {
        filter.select(choice.clone());
    }
}
