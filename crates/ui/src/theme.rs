use bevy_egui::{egui, EguiContexts};

// Palette: warm milk-tea browns on a dark background.
pub const PANEL: egui::Color32 = egui::Color32::from_rgb(38, 33, 30);
pub const INACTIVE: egui::Color32 = egui::Color32::from_rgb(58, 50, 44);
pub const HOVER: egui::Color32 = egui::Color32::from_rgb(84, 70, 58);
pub const PRIMARY: egui::Color32 = egui::Color32::from_rgb(196, 142, 92);
pub const TEXT: egui::Color32 = egui::Color32::from_rgb(232, 222, 210);
pub const TEXT_HEADING: egui::Color32 = egui::Color32::from_rgb(250, 240, 228);
pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(160, 148, 136);
pub const BADGE: egui::Color32 = egui::Color32::from_rgb(206, 72, 64);

pub const FONT_HEADING: f32 = 22.0;
pub const FONT_SUBHEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;

pub fn apply_teahouse_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    style.visuals.widgets.noninteractive.bg_fill = PANEL;
    style.visuals.widgets.inactive.bg_fill = INACTIVE;
    style.visuals.widgets.hovered.bg_fill = HOVER;
    style.visuals.widgets.active.bg_fill = PRIMARY;
    style.visuals.widgets.inactive.weak_bg_fill = INACTIVE;
    style.visuals.widgets.hovered.weak_bg_fill = HOVER;
    style.visuals.widgets.active.weak_bg_fill = PRIMARY;

    style.visuals.window_fill = PANEL;
    style.visuals.panel_fill = PANEL;
    style.visuals.override_text_color = Some(TEXT);

    // Active category button and radio choices.
    style.visuals.selection.bg_fill = PRIMARY;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, TEXT_HEADING);

    let window_rounding = egui::CornerRadius::same(10);
    let widget_rounding = egui::CornerRadius::same(6);
    style.visuals.window_corner_radius = window_rounding;
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    ctx.set_style(style);
}
