//! # TestShop: headless harness for the cart controller
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins` + `ShopPlugin` so tests can
//! drive the shop with the same events the UI sends and assert on the
//! resulting resources. Each action method sends one event and runs one
//! frame.

use bevy::prelude::*;

use crate::cart::Cart;
use crate::cart_view::CartView;
use crate::category_filter::{CategoryChoice, CategoryFilter};
use crate::customization::{Customization, ModifierForm};
use crate::events::{
    AddToCartRequested, CancelCustomization, CartPanelAction, CategorySelected, RemoveCartItem,
    SubmitCustomization,
};
use crate::menu::Menu;
use crate::panel::CartPanel;
use crate::ShopPlugin;

pub struct TestShop {
    app: App,
}

impl Default for TestShop {
    fn default() -> Self {
        Self::new()
    }
}

impl TestShop {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// A shop with the default menu and an empty cart.
    pub fn new() -> Self {
        Self::with_setup(|_| {})
    }

    /// Runs `setup` after `ShopPlugin` is added and before the first frame,
    /// e.g. to add a persistence plugin or insert resources.
    pub fn with_setup(setup: impl FnOnce(&mut App)) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(ShopPlugin);
        setup(&mut app);
        // Run one update so Startup systems execute.
        app.update();
        Self { app }
    }

    /// A shop whose catalog is `menu` instead of the default one.
    pub fn with_menu(menu: Menu) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(menu);
        app.add_plugins(ShopPlugin);
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------------

    /// Sends `event` and runs one frame.
    pub fn send<E: Event>(&mut self, event: E) -> &mut Self {
        self.app.world_mut().send_event(event);
        self.app.update();
        self
    }

    /// Presses an "Add" control carrying `name` and `price` text.
    pub fn pick(&mut self, name: &str, price: &str) -> &mut Self {
        self.send(AddToCartRequested {
            name: Some(name.to_string()),
            price: Some(price.to_string()),
        })
    }

    /// Edits the customization form in place (no frame is run).
    pub fn edit_form(&mut self, edit: impl FnOnce(&mut ModifierForm)) -> &mut Self {
        {
            let mut customization = self.app.world_mut().resource_mut::<Customization>();
            edit(&mut customization.form);
        }
        self
    }

    pub fn submit(&mut self) -> &mut Self {
        self.send(SubmitCustomization)
    }

    pub fn cancel(&mut self) -> &mut Self {
        self.send(CancelCustomization)
    }

    /// Picks a drink, applies `edit` to the form and submits it.
    pub fn order(
        &mut self,
        name: &str,
        price: &str,
        edit: impl FnOnce(&mut ModifierForm),
    ) -> &mut Self {
        self.pick(name, price);
        self.edit_form(edit);
        self.submit()
    }

    /// Presses the remove control on rendered row `row`.
    pub fn remove_row(&mut self, row: usize) -> &mut Self {
        self.send(RemoveCartItem { row })
    }

    pub fn toggle_cart(&mut self) -> &mut Self {
        self.send(CartPanelAction::Toggle)
    }

    pub fn close_cart(&mut self) -> &mut Self {
        self.send(CartPanelAction::Close)
    }

    /// Presses the category button carrying `tag` (`"all"` for every item).
    pub fn select_category(&mut self, tag: &str) -> &mut Self {
        self.send(CategorySelected(CategoryChoice::from_tag(tag)))
    }

    /// Runs one frame without sending anything.
    pub fn update(&mut self) -> &mut Self {
        self.app.update();
        self
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn resource<R: Resource>(&self) -> &R {
        self.app.world().resource::<R>()
    }

    pub fn cart(&self) -> &Cart {
        self.resource::<Cart>()
    }

    pub fn view(&self) -> &CartView {
        self.resource::<CartView>()
    }

    pub fn customization(&self) -> &Customization {
        self.resource::<Customization>()
    }

    pub fn panel_shown(&self) -> bool {
        self.resource::<CartPanel>().shown
    }

    pub fn filter(&self) -> &CategoryFilter {
        self.resource::<CategoryFilter>()
    }

    pub fn cart_names(&self) -> Vec<String> {
        self.cart().items().iter().map(|i| i.name.clone()).collect()
    }

    /// Names of the menu items the active category shows.
    pub fn visible_menu(&self) -> Vec<String> {
        let menu = self.resource::<Menu>();
        self.filter()
            .visible_items(menu)
            .map(|i| i.name.clone())
            .collect()
    }
}
