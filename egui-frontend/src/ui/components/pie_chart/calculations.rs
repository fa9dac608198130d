//! # Pie Chart Calculations
//!
//! Turns ordered (name, amount) pairs into slices with fractions, percentages
//! and angles. Each chart is computed against its own total only.

use std::f64::consts::PI;

/// Angle of the first slice's leading edge (12 o'clock)
pub const START_ANGLE: f64 = PI / 2.0;

/// A single wedge of a pie chart
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub amount: f64,
    /// Share of this chart's total (0.0 to 1.0)
    pub fraction: f64,
    /// Leading edge in radians, counter-clockwise from 3 o'clock
    pub start_angle: f64,
    /// Trailing edge in radians
    pub end_angle: f64,
}

impl PieSlice {
    pub fn percentage(&self) -> f64 {
        self.fraction * 100.0
    }

    /// Percentage annotation drawn inside the wedge
    pub fn percentage_label(&self) -> String {
        format_percentage(self.percentage())
    }

    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// Everything needed to draw one pie chart
#[derive(Debug, Clone, PartialEq)]
pub struct PieChartData {
    pub title: String,
    pub slices: Vec<PieSlice>,
    /// Sum of the positive amounts on this chart
    pub total: f64,
}

impl PieChartData {
    /// Build chart data from ordered entries.
    ///
    /// Non-positive amounts cannot be drawn as wedges, so they count as zero
    /// toward the total and get a zero-width slice.
    pub fn from_entries(title: &str, entries: &[(String, f64)]) -> Self {
        let total: f64 = entries.iter().map(|(_, amount)| amount.max(0.0)).sum();

        if total <= 0.0 {
            return Self {
                title: title.to_string(),
                slices: Vec::new(),
                total: 0.0,
            };
        }

        let mut angle = START_ANGLE;
        let slices = entries
            .iter()
            .map(|(label, amount)| {
                let fraction = amount.max(0.0) / total;
                let start_angle = angle;
                angle += 2.0 * PI * fraction;
                PieSlice {
                    label: label.clone(),
                    amount: *amount,
                    fraction,
                    start_angle,
                    end_angle: angle,
                }
            })
            .collect();

        Self {
            title: title.to_string(),
            slices,
            total,
        }
    }

    /// Placeholder chart with no slices
    pub fn empty(title: &str) -> Self {
        Self::from_entries(title, &[])
    }

    /// True when there is nothing to draw
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn percentage_sum(&self) -> f64 {
        self.slices.iter().map(PieSlice::percentage).sum()
    }
}

/// One decimal place with a percent sign, e.g. `"62.5%"`
pub fn format_percentage(percentage: f64) -> String {
    format!("{:.1}%", percentage)
}
