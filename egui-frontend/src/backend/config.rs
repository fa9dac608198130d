//! Startup configuration for the simulator window and its seed budget.

use serde::{Deserialize, Serialize};
use shared::CategoryKind;

/// A single (name, amount, kind) triple loaded into the budget at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySeed {
    pub name: String,
    pub amount: f64,
    pub kind: CategoryKind,
}

impl CategorySeed {
    pub fn new(name: &str, amount: f64, kind: CategoryKind) -> Self {
        Self {
            name: name.to_string(),
            amount,
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    pub window_title: String,
    /// Initial inner size in logical pixels
    pub window_size: [f32; 2],
    /// Seed categories in display order
    pub categories: Vec<CategorySeed>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            window_title: "Federal Budget Simulator".to_string(),
            window_size: [800.0, 600.0],
            categories: vec![
                CategorySeed::new("Property Tax", 5_000_000.0, CategoryKind::Revenue),
                CategorySeed::new("Sales Tax", 3_000_000.0, CategoryKind::Revenue),
                CategorySeed::new("Public Safety", 4_000_000.0, CategoryKind::Expense),
                CategorySeed::new("Infrastructure", 2_500_000.0, CategoryKind::Expense),
                CategorySeed::new("Parks and Recreation", 1_000_000.0, CategoryKind::Expense),
            ],
        }
    }
}
