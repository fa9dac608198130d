//! # App Coordinator Module
//!
//! The main update loop. Each frame:
//! 1. Render the heading, category form and "Calculate" button
//! 2. Render both breakdown charts
//! 3. Render the result dialog on top, disabling the panel while it is open
//!
//! "Calculate" runs synchronously inside step 1, so a recompute and the chart
//! rebuild that follows it always land in the same frame.

use eframe::egui;

use crate::ui::app_state::BudgetSimulatorApp;
use crate::ui::*;

impl eframe::App for BudgetSimulatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_frame(ctx);
    }
}

impl BudgetSimulatorApp {
    /// Draw one full frame
    pub fn render_frame(&mut self, ctx: &egui::Context) {
        // Sampled before the panel runs so a dialog opened by "Calculate"
        // ignores keys until the next frame
        let accepts_input = self.accepts_input();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(accepts_input, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(6.0);
                    ui.label(heading_text(&self.title));
                });
                ui.add_space(8.0);

                self.render_category_form(ui);

                ui.add_space(8.0);
                self.render_calculate_button(ui);

                ui.add_space(8.0);
                ui.separator();
                self.render_charts(ui);
            });
        });

        self.render_dialog(ctx, !accepts_input);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{Backend, SimulatorConfig};

    fn create_test_app() -> BudgetSimulatorApp {
        let config = SimulatorConfig::default();
        let backend = Backend::new(&config).expect("Failed to create test backend");
        BudgetSimulatorApp::with_backend(backend, &config.window_title)
    }

    fn key_press(key: egui::Key) -> egui::RawInput {
        egui::RawInput {
            events: vec![egui::Event::Key {
                key,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::default(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_open_dialog_blocks_main_panel() {
        let mut app = create_test_app();
        assert!(app.accepts_input());

        app.calculate_budget();
        assert!(!app.accepts_input());

        app.modal.dismiss();
        assert!(app.accepts_input());
    }

    #[test]
    fn test_full_frame_closes_open_dialog_on_escape() {
        let ctx = egui::Context::default();
        let mut app = create_test_app();
        app.calculate_budget();

        let _ = ctx.run(egui::RawInput::default(), |ctx| app.render_frame(ctx));
        assert!(app.modal.is_open());

        let _ = ctx.run(key_press(egui::Key::Escape), |ctx| app.render_frame(ctx));
        assert!(!app.modal.is_open());
        assert!(app.accepts_input());
    }

    #[test]
    fn test_full_frame_leaves_model_alone_while_dialog_is_open() {
        let ctx = egui::Context::default();
        let mut app = create_test_app();
        app.calculate_budget();
        let revision = app.chart.revision;

        for _ in 0..3 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| app.render_frame(ctx));
        }

        assert!(app.modal.is_open());
        assert_eq!(app.chart.revision, revision);
    }
}
