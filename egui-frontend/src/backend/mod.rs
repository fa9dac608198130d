//! # Backend Module for egui Frontend
//!
//! This backend module owns the in-memory budget and exposes it to the UI
//! through the `BudgetService`. Everything is synchronous and lives on the
//! UI thread; there is no storage layer.

use anyhow::{Context, Result};
use log::info;

pub mod config;
pub mod domain;

pub use config::{CategorySeed, SimulatorConfig};

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub budget_service: domain::BudgetService,
}

impl Backend {
    /// Create a new backend seeded from the given configuration
    pub fn new(config: &SimulatorConfig) -> Result<Self> {
        let budget_service = domain::BudgetService::from_seed(&config.categories)
            .context("Failed to seed budget categories")?;

        info!(
            "🏛️ Backend ready with {} budget categories",
            budget_service.list_categories().len()
        );

        Ok(Backend { budget_service })
    }
}
