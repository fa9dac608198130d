//! In-memory budget: an ordered set of categories with derived totals.
//!
//! Totals are never adjusted incrementally. Every mutation ends with a full
//! re-summation over the current amounts.

use std::collections::HashMap;

use shared::{BudgetTotals, CategoryKind};

use super::category::{parse_amount, DomainCategory};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BudgetError {
    #[error("Invalid input for {category}")]
    InvalidNumericInput { category: String },
    #[error("Category already exists: {0}")]
    DuplicateCategory(String),
}

impl BudgetError {
    /// Name of the category the error is about
    pub fn category(&self) -> &str {
        match self {
            BudgetError::InvalidNumericInput { category } => category,
            BudgetError::DuplicateCategory(name) => name,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Budget {
    /// Display order
    categories: Vec<DomainCategory>,
    /// name -> position in `categories`
    index: HashMap<String, usize>,
    total_revenue: f64,
    total_expenses: f64,
}

impl Budget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new category at the end of the display order
    pub fn add_category(
        &mut self,
        name: impl Into<String>,
        amount: f64,
        kind: CategoryKind,
    ) -> Result<(), BudgetError> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(BudgetError::DuplicateCategory(name));
        }

        self.index.insert(name.clone(), self.categories.len());
        self.categories.push(DomainCategory::new(name, amount, kind));
        self.recalculate_totals();
        Ok(())
    }

    /// Reparse every category's raw text and commit only if all of them parse.
    ///
    /// A category with no entry in `edited_values` is treated as empty text.
    /// On failure the first offending category in display order is reported
    /// and no amount is touched.
    pub fn recompute(
        &mut self,
        edited_values: &HashMap<String, String>,
    ) -> Result<BudgetTotals, BudgetError> {
        let parsed = self
            .categories
            .iter()
            .map(|category| {
                let raw = edited_values
                    .get(&category.name)
                    .map(String::as_str)
                    .unwrap_or("");
                parse_amount(raw).ok_or_else(|| BudgetError::InvalidNumericInput {
                    category: category.name.clone(),
                })
            })
            .collect::<Result<Vec<f64>, BudgetError>>()?;

        for (category, amount) in self.categories.iter_mut().zip(parsed) {
            category.amount = amount;
        }
        self.recalculate_totals();

        Ok(self.totals())
    }

    fn recalculate_totals(&mut self) {
        self.total_revenue = self.sum_of(CategoryKind::Revenue);
        self.total_expenses = self.sum_of(CategoryKind::Expense);
    }

    fn sum_of(&self, kind: CategoryKind) -> f64 {
        self.categories
            .iter()
            .filter(|category| category.kind == kind)
            .map(|category| category.amount)
            .sum()
    }

    pub fn totals(&self) -> BudgetTotals {
        BudgetTotals::new(self.total_revenue, self.total_expenses)
    }

    pub fn total_revenue(&self) -> f64 {
        self.total_revenue
    }

    pub fn total_expenses(&self) -> f64 {
        self.total_expenses
    }

    pub fn categories(&self) -> &[DomainCategory] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&DomainCategory> {
        self.index.get(name).map(|&position| &self.categories[position])
    }

    /// Ordered (name, amount) pairs for a single kind
    pub fn amounts_by_kind(&self, kind: CategoryKind) -> Vec<(String, f64)> {
        self.categories
            .iter()
            .filter(|category| category.kind == kind)
            .map(|category| (category.name.clone(), category.amount))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// True when the imbalance is within 1% of the average of the two totals.
pub fn is_balanced(total_revenue: f64, total_expenses: f64, balance: f64) -> bool {
    balance.abs() <= 0.01 * (total_revenue + total_expenses) / 2.0
}
