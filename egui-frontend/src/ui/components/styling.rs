//! # Styling Module
//!
//! Global egui styling for the simulator window.
//!
//! ## Key Functions:
//! - `setup_budget_style()` - Configure text sizes, spacing and rounding
//! - `heading_text()` - Rich text used for the window heading

use eframe::egui;

use super::theme::colors;

/// Setup UI styling for the entire application
pub fn setup_budget_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals = egui::Visuals::light();
        style.visuals.button_frame = true;

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(20.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(14.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );

        // Rounded corners and padding
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(6.0);

        style
    });
}

/// Heading shown at the top of the window
pub fn heading_text(title: &str) -> egui::RichText {
    egui::RichText::new(title)
        .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
        .strong()
        .color(colors::TEXT_HEADING)
}
