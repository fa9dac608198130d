//! # UI Components Module
//!
//! ## Module Organization:
//! - `category_form` - Category rows and the "Calculate" button
//! - `chart_renderer` - Side-by-side layout of the two breakdown charts
//! - `pie_chart` - Pie chart math and painting
//! - `modals` - Error, success and warning dialogs
//! - `styling` - Global egui style setup
//! - `theme` - Color constants

pub mod category_form;
pub mod chart_renderer;
pub mod modals;
pub mod pie_chart;
pub mod styling;
pub mod theme;

pub use styling::{heading_text, setup_budget_style};
pub use theme::*;
