//! Budget service for the simulator.
//!
//! Thin facade over the `Budget` model that the UI talks to. It owns the
//! budget, converts domain categories into shared snapshots and logs every
//! recalculation pass.

use std::collections::HashMap;

use log::{info, warn};
use shared::{BudgetTotals, CategoryKind, CategorySnapshot};

use crate::backend::config::CategorySeed;
use super::models::budget::{Budget, BudgetError};

/// Service responsible for the budget lifecycle and recalculation
#[derive(Debug, Clone)]
pub struct BudgetService {
    budget: Budget,
}

impl BudgetService {
    pub fn new(budget: Budget) -> Self {
        Self { budget }
    }

    /// Build a budget from seed triples, in order
    pub fn from_seed(seeds: &[CategorySeed]) -> Result<Self, BudgetError> {
        let mut budget = Budget::new();
        for seed in seeds {
            budget.add_category(seed.name.clone(), seed.amount, seed.kind)?;
        }

        info!(
            "🌱 Seeded budget: revenue=${:.2}, expenses=${:.2}",
            budget.total_revenue(),
            budget.total_expenses()
        );
        Ok(Self::new(budget))
    }

    /// All categories in display order
    pub fn list_categories(&self) -> Vec<CategorySnapshot> {
        self.budget
            .categories()
            .iter()
            .map(|category| category.to_snapshot())
            .collect()
    }

    pub fn current_totals(&self) -> BudgetTotals {
        self.budget.totals()
    }

    /// Push raw field text back into the model and re-sum.
    pub fn recompute(
        &mut self,
        edited_values: &HashMap<String, String>,
    ) -> Result<BudgetTotals, BudgetError> {
        info!("🧮 Recomputing budget from {} edited fields", edited_values.len());

        match self.budget.recompute(edited_values) {
            Ok(totals) => {
                info!(
                    "🧮 Recompute complete: revenue=${:.2}, expenses=${:.2}, balance=${:.2}",
                    totals.total_revenue, totals.total_expenses, totals.balance
                );
                Ok(totals)
            }
            Err(e) => {
                warn!("❌ Recompute aborted, no amounts changed: {}", e);
                Err(e)
            }
        }
    }

    /// Ordered (name, amount) pairs for one chart
    pub fn chart_entries(&self, kind: CategoryKind) -> Vec<(String, f64)> {
        self.budget.amounts_by_kind(kind)
    }

    pub fn budget(&self) -> &Budget {
        &self.budget
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::config::SimulatorConfig;

    fn create_test_service() -> BudgetService {
        BudgetService::from_seed(&SimulatorConfig::default().categories)
            .expect("Failed to seed test budget")
    }

    #[test]
    fn test_list_categories_in_seed_order() {
        let service = create_test_service();
        let categories = service.list_categories();

        assert_eq!(categories.len(), 5);
        assert_eq!(categories[0].name, "Property Tax");
        assert_eq!(categories[0].kind, CategoryKind::Revenue);
        assert_eq!(categories[4].name, "Parks and Recreation");
        assert_eq!(categories[4].amount, 1_000_000.0);
    }

    #[test]
    fn test_recompute_through_service() {
        let mut service = create_test_service();
        let mut values: HashMap<String, String> = service
            .list_categories()
            .into_iter()
            .map(|category| (category.name, category.amount.to_string()))
            .collect();
        values.insert("Sales Tax".to_string(), "2500000".to_string());

        let totals = service.recompute(&values).unwrap();

        assert_eq!(totals.total_revenue, 7_500_000.0);
        assert_eq!(totals.balance, 0.0);
        assert_eq!(service.current_totals(), totals);
        assert_eq!(
            service.chart_entries(CategoryKind::Revenue)[1],
            ("Sales Tax".to_string(), 2_500_000.0)
        );
    }

    #[test]
    fn test_chart_entries_exclude_other_kind() {
        let service = create_test_service();

        let expense_names: Vec<String> = service
            .chart_entries(CategoryKind::Expense)
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(expense_names, vec!["Public Safety", "Infrastructure", "Parks and Recreation"]);
    }
}
