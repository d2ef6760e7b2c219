use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use shop::ShopSet;

mod cart_panel;
mod customization_dialog;
mod menu_panel;
pub mod theme;

/// egui front end for the shop. Widgets only send shop events; the
/// systems run before `ShopSet::Input` so a click is handled in the same
/// frame.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Startup, theme::apply_teahouse_theme)
            .add_systems(
                Update,
                (
                    // Panels before the central menu, dialogs on top.
                    cart_panel::cart_bar_ui,
                    menu_panel::menu_panel_ui,
                    customization_dialog::customization_dialog_ui,
                    cart_panel::cart_window_ui,
                )
                    .chain()
                    .before(ShopSet::Input),
            );
    }
}
