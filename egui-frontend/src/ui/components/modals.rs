//! # Result Dialogs
//!
//! Renders the dialog opened by "Calculate": error for invalid input, success
//! for a balanced budget, warning otherwise. The dialog sits on a dimmed
//! foreground overlay and closes with "OK", Enter or Escape.

use eframe::egui;

use crate::ui::app_state::BudgetSimulatorApp;
use crate::ui::components::theme::colors;
use crate::ui::state::DialogKind;

fn accent_color(kind: DialogKind) -> egui::Color32 {
    match kind {
        DialogKind::Error => colors::DIALOG_ERROR,
        DialogKind::Success => colors::DIALOG_SUCCESS,
        DialogKind::Warning => colors::DIALOG_WARNING,
    }
}

impl BudgetSimulatorApp {
    /// Render the active dialog, if any.
    ///
    /// `accept_keys` must be false on the frame the dialog was opened, or the
    /// key press that triggered "Calculate" would close it immediately.
    pub fn render_dialog(&mut self, ctx: &egui::Context, accept_keys: bool) {
        let Some(dialog) = self.modal.active_dialog.clone() else {
            return;
        };

        let accent = accent_color(dialog.kind);
        let mut dismissed = accept_keys
            && ctx.input(|i| i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape));

        // Use Area with Foreground order to ensure it appears above everything
        egui::Area::new(egui::Id::new("budget_dialog_overlay"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::Pos2::ZERO)
            .show(ctx, |ui| {
                let screen_rect = ctx.screen_rect();
                ui.painter().rect_filled(screen_rect, egui::Rounding::ZERO, colors::DIALOG_OVERLAY);

                ui.allocate_ui_at_rect(screen_rect, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(screen_rect.height() / 4.0);

                        egui::Frame::window(ui.style())
                            .fill(colors::DIALOG_BACKGROUND)
                            .stroke(egui::Stroke::new(3.0, accent))
                            .rounding(egui::Rounding::same(15.0))
                            .inner_margin(egui::Margin::same(20.0))
                            .show(ui, |ui| {
                                ui.set_max_width(420.0);

                                ui.label(egui::RichText::new(format!("{} {}", dialog.kind.icon(), dialog.title))
                                    .font(egui::FontId::new(22.0, egui::FontFamily::Proportional))
                                    .strong()
                                    .color(accent));

                                ui.add_space(12.0);

                                ui.label(egui::RichText::new(&dialog.message)
                                    .font(egui::FontId::new(15.0, egui::FontFamily::Proportional))
                                    .color(colors::TEXT_PRIMARY));

                                ui.add_space(16.0);

                                if ui.add_sized([100.0, 34.0], egui::Button::new("OK")).clicked() {
                                    dismissed = true;
                                }
                            });
                    });
                });
            });

        if dismissed {
            log::info!("💬 Dismissed {:?} dialog", dialog.kind);
            self.modal.dismiss();
        }
    }
}
