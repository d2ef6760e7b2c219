use bevy::prelude::*;

pub mod cart;
pub mod cart_view;
pub mod category_filter;
pub mod config;
mod controller;
pub mod customization;
pub mod events;
pub mod field_parse;
pub mod line_item;
pub mod menu;
pub mod panel;
pub mod shop_sets;

#[cfg(any(test, feature = "test-harness"))]
pub mod test_harness;

pub use cart::Cart;
pub use cart_view::CartView;
pub use events::CartChanged;
pub use line_item::LineItem;
pub use shop_sets::ShopSet;

use category_filter::CategoryFilter;
use customization::{Customization, ModifierForm};
use events::{
    AddToCartRequested, CancelCustomization, CartPanelAction, CategorySelected, RemoveCartItem,
    SubmitCustomization,
};
use menu::Menu;
use panel::CartPanel;

/// Cart controller: shop state, the event handlers that mutate it and the
/// cart view rebuild.
///
/// A `Menu` inserted before this plugin replaces the default catalog.
pub struct ShopPlugin;

impl Plugin for ShopPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Menu>();
        let toppings = app.world().resource::<Menu>().toppings.clone();

        app.init_resource::<Cart>()
            .init_resource::<CartView>()
            .init_resource::<CartPanel>()
            .init_resource::<CategoryFilter>()
            .insert_resource(Customization::new(ModifierForm::new(toppings.as_slice())));

        app.add_event::<AddToCartRequested>()
            .add_event::<SubmitCustomization>()
            .add_event::<CancelCustomization>()
            .add_event::<RemoveCartItem>()
            .add_event::<CartPanelAction>()
            .add_event::<CategorySelected>()
            .add_event::<CartChanged>();

        app.configure_sets(Update, (ShopSet::Input, ShopSet::View).chain());

        app.add_systems(
            Update,
            (
                controller::handle_add_requests,
                controller::handle_submissions,
                controller::handle_cancellations,
                controller::handle_removals,
                controller::handle_panel_events,
                controller::handle_category_selection,
            )
                .chain()
                .in_set(ShopSet::Input),
        );
        app.add_systems(
            Update,
            cart_view::refresh_cart_view
                .run_if(resource_changed::<Cart>)
                .in_set(ShopSet::View),
        );
    }
}
