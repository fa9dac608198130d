//! # Chart Renderer Module
//!
//! Lays out the revenue and expense breakdowns side by side below the form.
//! The chart data itself lives in `ChartState` and is rebuilt by `update_chart`.

use eframe::egui;

use crate::ui::app_state::BudgetSimulatorApp;
use crate::ui::components::pie_chart::PieChart;

impl BudgetSimulatorApp {
    /// Draw both pie charts in the remaining space
    pub fn render_charts(&self, ui: &mut egui::Ui) {
        let pie = PieChart::new();

        ui.columns(2, |columns| {
            pie.render(&mut columns[0], &self.chart.revenue);
            pie.render(&mut columns[1], &self.chart.expense);
        });
    }
}
