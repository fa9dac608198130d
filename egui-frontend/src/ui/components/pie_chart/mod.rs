//! # Pie Chart Module
//!
//! Breakdown pie charts for the revenue and expense categories.
//!
//! ## Key Components:
//! - `calculations.rs` - Slice fractions, percentages and angles per chart
//! - `renderer.rs` - Wedge and label painting using egui primitives

pub mod calculations;
pub mod renderer;

pub use calculations::{format_percentage, PieChartData, PieSlice};
pub use renderer::{PieChart, PieChartConfig};
