//! Modal dialog for customizing the picked drink.
//!
//! Shown while the workflow is selecting. The form fields are edited in
//! place; adding or cancelling is left to the shop handlers via events.
//! Escape cancels.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use shop::cart::format_money;
use shop::config::{MILK_CHOICES, SIZE_CHOICES, SWEETNESS_CHOICES, TOPPING_SURCHARGE};
use shop::customization::{compose_line_item, Customization};
use shop::events::{CancelCustomization, SubmitCustomization};

use crate::theme;

pub(crate) fn customization_dialog_ui(
    mut contexts: EguiContexts,
    mut customization: ResMut<Customization>,
    mut submits: EventWriter<SubmitCustomization>,
    mut cancels: EventWriter<CancelCustomization>,
) {
    let Some(title) = customization.title() else {
        return;
    };

    let ctx = contexts.ctx_mut();

    // Semi-transparent backdrop to block interaction with the menu.
    let screen_rect = ctx.screen_rect();
    egui::Area::new(egui::Id::new("customization_backdrop"))
        .fixed_pos(screen_rect.min)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.painter().rect_filled(
                screen_rect,
                egui::CornerRadius::ZERO,
                egui::Color32::from_black_alpha(140),
            );
            ui.allocate_rect(screen_rect, egui::Sense::click());
        });

    let mut submitted = false;
    let mut cancelled = ctx.input(|i| i.key_pressed(egui::Key::Escape));

    egui::Window::new("customization_dialog")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .default_width(360.0)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(&title)
                    .size(theme::FONT_HEADING)
                    .strong()
                    .color(theme::TEXT_HEADING),
            );
            ui.add_space(8.0);

            {
                let form = &mut customization.form;
                choice_row(ui, "Size", &SIZE_CHOICES, &mut form.size);
                choice_row(ui, "Milk", &MILK_CHOICES, &mut form.milk);
                choice_row(ui, "Sweetness", &SWEETNESS_CHOICES, &mut form.sweetness);

                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new(format!(
                        "Toppings (+${} each)",
                        format_money(TOPPING_SURCHARGE)
                    ))
                    .size(theme::FONT_SUBHEADING),
                );
                egui::Grid::new("topping_quantities")
                    .num_columns(2)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        for topping in &mut form.toppings {
                            ui.label(topping.name.as_str());
                            ui.add(
                                egui::TextEdit::singleline(&mut topping.quantity)
                                    .desired_width(40.0),
                            );
                            ui.end_row();
                        }
                    });

                ui.add_space(6.0);
                ui.label(egui::RichText::new("Notes").size(theme::FONT_SUBHEADING));
                ui.add(
                    egui::TextEdit::singleline(&mut form.notes)
                        .hint_text("e.g. less ice")
                        .desired_width(f32::INFINITY),
                );
            }

            if let Some(selection) = customization.selection() {
                let preview = compose_line_item(selection, &customization.form);
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(format!("{} - ${}", preview.name, preview.price_label()))
                        .color(theme::TEXT_MUTED),
                );
            }

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                let button_size = egui::Vec2::new(120.0, 32.0);
                if ui
                    .add_sized(button_size, egui::Button::new("Add to cart"))
                    .clicked()
                {
                    submitted = true;
                }
                if ui
                    .add_sized(button_size, egui::Button::new("Cancel"))
                    .clicked()
                {
                    cancelled = true;
                }
            });
        });

    if submitted {
        submits.send(SubmitCustomization);
    } else if cancelled {
        cancels.send(CancelCustomization);
    }
}

/// One labelled row of radio buttons writing the chosen text into `value`.
fn choice_row(ui: &mut egui::Ui, label: &str, choices: &[&str], value: &mut String) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).size(theme::FONT_BODY).strong());
        for choice in choices {
            ui.radio_value(&mut *value, choice.to_string(), *choice);
        }
    });
}
