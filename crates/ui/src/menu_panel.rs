//! Menu browser: category buttons across the top, then the drinks the
//! active category shows, each with an "Add" control.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use shop::cart::format_money;
use shop::category_filter::{category_buttons, CategoryFilter};
use shop::events::{AddToCartRequested, CategorySelected};
use shop::menu::Menu;

use crate::theme;

pub(crate) fn menu_panel_ui(
    mut contexts: EguiContexts,
    menu: Res<Menu>,
    filter: Res<CategoryFilter>,
    mut categories: EventWriter<CategorySelected>,
    mut adds: EventWriter<AddToCartRequested>,
) {
    egui::CentralPanel::default().show(contexts.ctx_mut(), |ui| {
        ui.horizontal_wrapped(|ui| {
            for choice in category_buttons(&menu) {
                let active = filter.is_active(&choice);
                let text = egui::RichText::new(choice.label()).size(theme::FONT_SUBHEADING);
                if ui.selectable_label(active, text).clicked() && !active {
                    categories.send(CategorySelected(choice));
                }
            }
        });
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            for item in filter.visible_items(&menu) {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(&item.name)
                                .size(theme::FONT_SUBHEADING)
                                .strong()
                                .color(theme::TEXT_HEADING),
                        );
                        ui.label(
                            egui::RichText::new(format!("${}", format_money(item.price)))
                                .size(theme::FONT_BODY)
                                .color(theme::TEXT_MUTED),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Add").clicked() {
                            adds.send(item.add_request());
                        }
                    });
                });
                ui.add_space(6.0);
            }
        });
    });
}
