//! # Chart State Module
//!
//! Holds the two breakdown chart snapshots. They are replaced wholesale by
//! `update_chart` and never patched in place.

use shared::CategoryKind;

use crate::ui::components::pie_chart::PieChartData;

/// Chart-specific state for the revenue and expense breakdowns
#[derive(Debug)]
pub struct ChartState {
    pub revenue: PieChartData,
    pub expense: PieChartData,

    /// Number of times the charts have been rebuilt
    pub revision: u64,
}

impl ChartState {
    /// Create new chart state with empty charts
    pub fn new() -> Self {
        Self {
            revenue: PieChartData::empty(CategoryKind::Revenue.chart_title()),
            expense: PieChartData::empty(CategoryKind::Expense.chart_title()),
            revision: 0,
        }
    }

    /// Replace both charts
    pub fn set_data(&mut self, revenue: PieChartData, expense: PieChartData) {
        self.revenue = revenue;
        self.expense = expense;
        self.revision += 1;
    }
}

impl Default for ChartState {
    fn default() -> Self {
        Self::new()
    }
}
