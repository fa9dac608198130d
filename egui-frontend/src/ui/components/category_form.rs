//! # Category Form
//!
//! One row per category: `"{name}:"` on the left and an editable amount field
//! on the right, followed by the "Calculate" button.

use eframe::egui;

use crate::ui::app_state::BudgetSimulatorApp;
use crate::ui::components::theme::colors;
use crate::ui::state::InteractionState;

const FIELD_WIDTH: f32 = 180.0;

/// Stable widget id of a category's amount field
pub fn field_id(name: &str) -> egui::Id {
    egui::Id::new(("category_field", name))
}

impl BudgetSimulatorApp {
    /// Render the category rows. Tracks whether any field has keyboard focus.
    pub fn render_category_form(&mut self, ui: &mut egui::Ui) {
        let mut editing = false;

        for field in self.form.fields.iter_mut() {
            ui.horizontal(|ui| {
                ui.add_space(10.0);
                ui.label(egui::RichText::new(field.label())
                    .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                    .color(colors::TEXT_PRIMARY));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(10.0);
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut field.text)
                            .id(field_id(&field.name))
                            .desired_width(FIELD_WIDTH)
                            .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                    );
                    if response.has_focus() {
                        editing = true;
                    }
                });
            });
        }

        if editing {
            self.set_interaction(InteractionState::Editing);
        } else if self.interaction == InteractionState::Editing {
            self.set_interaction(InteractionState::Idle);
        }
    }

    /// Render the "Calculate" button and run the calculation when pressed
    pub fn render_calculate_button(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            let button = egui::Button::new(egui::RichText::new("Calculate")
                .font(egui::FontId::new(15.0, egui::FontFamily::Proportional)))
                .min_size(egui::vec2(120.0, 32.0));

            if ui.add(button).clicked() {
                self.calculate_budget();
            }
        });
    }
}
