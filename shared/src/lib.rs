use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a budget line item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    /// Money coming in (taxes, fees)
    Revenue,
    /// Money going out (services, projects)
    Expense,
}

impl CategoryKind {
    pub const ALL: [CategoryKind; 2] = [CategoryKind::Revenue, CategoryKind::Expense];

    /// Title used for this kind's breakdown chart
    pub fn chart_title(&self) -> &'static str {
        match self {
            CategoryKind::Revenue => "Revenue Breakdown",
            CategoryKind::Expense => "Expense Breakdown",
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryKind::Revenue => write!(f, "revenue"),
            CategoryKind::Expense => write!(f, "expense"),
        }
    }
}

/// Read-only view of a single category handed to the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySnapshot {
    pub name: String,
    pub amount: f64,
    pub kind: CategoryKind,
}

/// Result of a successful recalculation pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetTotals {
    pub total_revenue: f64,
    pub total_expenses: f64,
    /// Total revenue minus total expenses
    pub balance: f64,
}

impl BudgetTotals {
    pub fn new(total_revenue: f64, total_expenses: f64) -> Self {
        Self {
            total_revenue,
            total_expenses,
            balance: total_revenue - total_expenses,
        }
    }

    /// Multi-line summary shown in the result dialog
    pub fn summary_message(&self) -> String {
        format!(
            "Total Revenue: ${:.2}\nTotal Expenses: ${:.2}\nBalance: ${:.2}",
            self.total_revenue, self.total_expenses, self.balance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_balance_is_revenue_minus_expenses() {
        let totals = BudgetTotals::new(8_000_000.0, 7_500_000.0);
        assert_eq!(totals.balance, 500_000.0);

        let deficit = BudgetTotals::new(1.0, 3.5);
        assert_eq!(deficit.balance, -2.5);
    }

    #[test]
    fn test_summary_message_uses_two_decimals_and_dollar_prefix() {
        let totals = BudgetTotals::new(8_000_000.0, 7_500_000.0);
        assert_eq!(
            totals.summary_message(),
            "Total Revenue: $8000000.00\nTotal Expenses: $7500000.00\nBalance: $500000.00"
        );
    }

    #[test]
    fn test_chart_titles() {
        assert_eq!(CategoryKind::Revenue.chart_title(), "Revenue Breakdown");
        assert_eq!(CategoryKind::Expense.chart_title(), "Expense Breakdown");
    }
}
