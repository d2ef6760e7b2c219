//! Cart toggle bar and the cart window.
//!
//! The top bar carries the cart toggle with an item-count badge. While the
//! panel is shown, a window lists every row of the current [`CartView`]
//! with a remove control, then the running total.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use shop::events::{CartPanelAction, RemoveCartItem};
use shop::panel::CartPanel;
use shop::CartView;

use crate::theme;

pub(crate) fn cart_bar_ui(
    mut contexts: EguiContexts,
    view: Res<CartView>,
    panel: Res<CartPanel>,
    mut panel_actions: EventWriter<CartPanelAction>,
) {
    egui::TopBottomPanel::top("cart_bar").show(contexts.ctx_mut(), |ui| {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("Teahouse")
                    .size(theme::FONT_HEADING)
                    .strong()
                    .color(theme::TEXT_HEADING),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                count_badge(ui, &view.count);
                let text = egui::RichText::new(toggle_label(panel.shown)).size(theme::FONT_BODY);
                if ui.selectable_label(panel.shown, text).clicked() {
                    panel_actions.send(CartPanelAction::Toggle);
                }
            });
        });
    });
}

pub(crate) fn cart_window_ui(
    mut contexts: EguiContexts,
    view: Res<CartView>,
    panel: Res<CartPanel>,
    mut removals: EventWriter<RemoveCartItem>,
    mut panel_actions: EventWriter<CartPanelAction>,
) {
    if !panel.shown {
        return;
    }

    egui::Window::new("Your Cart")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::RIGHT_TOP, egui::Vec2::new(-12.0, 48.0))
        .default_width(380.0)
        .show(contexts.ctx_mut(), |ui| {
            if view.rows.is_empty() {
                ui.label(egui::RichText::new("Your cart is empty.").color(theme::TEXT_MUTED));
            }

            egui::ScrollArea::vertical()
                .max_height(320.0)
                .show(ui, |ui| {
                    for (row, item) in view.rows.iter().enumerate() {
                        ui.horizontal(|ui| {
                            ui.label(item.label.as_str());
                            if ui.small_button("❌").on_hover_text("Remove").clicked() {
                                removals.send(RemoveCartItem { row });
                            }
                        });
                    }
                });

            ui.separator();
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Total:").strong());
                ui.label(
                    egui::RichText::new(format!("${}", view.total))
                        .strong()
                        .color(theme::PRIMARY),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Close").clicked() {
                        panel_actions.send(CartPanelAction::Close);
                    }
                });
            });
        });
}

fn toggle_label(shown: bool) -> &'static str {
    if shown {
        "🛒 Hide cart"
    } else {
        "🛒 Cart"
    }
}

/// Small filled pill showing the item count.
fn count_badge(ui: &mut egui::Ui, count: &str) {
    egui::Frame::new()
        .fill(theme::BADGE)
        .corner_radius(egui::CornerRadius::same(9))
        .inner_margin(egui::Margin::symmetric(6, 1))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(count)
                    .size(theme::FONT_BODY)
                    .strong()
                    .color(egui::Color32::WHITE),
            );
        });
}
