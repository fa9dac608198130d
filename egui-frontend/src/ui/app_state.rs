//! # App State Module
//!
//! This module defines the central application state structure for the
//! budget simulator and the two actions that touch the model.
//!
//! ## Key Types:
//! - `BudgetSimulatorApp` - Main application state struct
//! - `CalculationOutcome` - What a "Calculate" press produced
//!
//! ## Key Functions:
//! - `new()` - Initialize the app from an eframe creation context
//! - `with_backend()` - Build the app around an already seeded backend
//! - `calculate_budget()` - Push field text into the model and open a result dialog
//! - `update_chart()` - Rebuild both breakdown charts from the model
//!
//! ## State Management:
//! The struct owns the `Backend` (and through it the budget) plus one state
//! struct per UI concern. Nothing lives in statics.

use log::{debug, info};
use shared::{BudgetTotals, CategoryKind};

use crate::backend::domain::is_balanced;
use crate::backend::Backend;
use crate::ui::components::pie_chart::PieChartData;
use crate::ui::state::{BudgetDialog, CategoryFormState, ChartState, InteractionState, ModalState};

/// Result of one "Calculate" press
#[derive(Debug, Clone, PartialEq)]
pub enum CalculationOutcome {
    /// A field failed to parse; nothing changed
    InvalidInput { category: String },
    Balanced(BudgetTotals),
    Imbalanced(BudgetTotals),
}

/// Main application struct for the egui budget simulator
pub struct BudgetSimulatorApp {
    pub backend: Backend,
    pub title: String,

    // Per-concern state
    pub form: CategoryFormState,
    pub chart: ChartState,
    pub modal: ModalState,
    pub interaction: InteractionState,
}

impl BudgetSimulatorApp {
    /// Create the app inside eframe's creator callback
    pub fn new(cc: &eframe::CreationContext<'_>, backend: Backend, title: &str) -> Self {
        info!("🚀 Initializing BudgetSimulatorApp");

        crate::ui::setup_budget_style(&cc.egui_ctx);

        Self::with_backend(backend, title)
    }

    /// Build the app state without a GUI context
    pub fn with_backend(backend: Backend, title: &str) -> Self {
        let form = CategoryFormState::from_categories(&backend.budget_service.list_categories());

        let mut app = Self {
            backend,
            title: title.to_string(),
            form,
            chart: ChartState::new(),
            modal: ModalState::new(),
            interaction: InteractionState::Idle,
        };
        app.update_chart();
        app
    }

    /// Rebuild both breakdown charts from the model's current amounts
    pub fn update_chart(&mut self) {
        let service = &self.backend.budget_service;

        let revenue = PieChartData::from_entries(
            CategoryKind::Revenue.chart_title(),
            &service.chart_entries(CategoryKind::Revenue),
        );
        let expense = PieChartData::from_entries(
            CategoryKind::Expense.chart_title(),
            &service.chart_entries(CategoryKind::Expense),
        );

        info!(
            "📊 Rebuilt charts: {} revenue slices (${:.2}), {} expense slices (${:.2})",
            revenue.slices.len(),
            revenue.total,
            expense.slices.len(),
            expense.total
        );
        self.chart.set_data(revenue, expense);
    }

    /// Handle the "Calculate" action
    pub fn calculate_budget(&mut self) -> CalculationOutcome {
        self.set_interaction(InteractionState::Recomputing);

        let raw_values = self.form.raw_values();
        let outcome = match self.backend.budget_service.recompute(&raw_values) {
            Ok(totals) => {
                let outcome = if is_balanced(totals.total_revenue, totals.total_expenses, totals.balance) {
                    info!("✅ Budget is balanced");
                    self.modal.show(BudgetDialog::balanced(&totals));
                    CalculationOutcome::Balanced(totals)
                } else {
                    info!("⚠️ Budget is out of balance by ${:.2}", totals.balance);
                    self.modal.show(BudgetDialog::imbalanced(&totals));
                    CalculationOutcome::Imbalanced(totals)
                };
                self.update_chart();
                outcome
            }
            Err(e) => {
                self.modal.show(BudgetDialog::invalid_input(e.to_string()));
                CalculationOutcome::InvalidInput {
                    category: e.category().to_string(),
                }
            }
        };

        self.set_interaction(InteractionState::Idle);
        outcome
    }

    /// False while a dialog is open; the main panel is disabled then
    pub fn accepts_input(&self) -> bool {
        !self.modal.is_open()
    }

    pub fn set_interaction(&mut self, state: InteractionState) {
        if self.interaction != state {
            debug!("🖱️ Interaction {:?} -> {:?}", self.interaction, state);
            self.interaction = state;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::SimulatorConfig;
    use crate::ui::state::DialogKind;

    fn create_test_app() -> BudgetSimulatorApp {
        let config = SimulatorConfig::default();
        let backend = Backend::new(&config).expect("Failed to create test backend");
        BudgetSimulatorApp::with_backend(backend, &config.window_title)
    }

    fn amount_of(app: &BudgetSimulatorApp, name: &str) -> f64 {
        app.backend.budget_service.budget().category(name).unwrap().amount
    }

    #[test]
    fn test_initial_state() {
        let app = create_test_app();

        assert_eq!(app.title, "Federal Budget Simulator");
        assert_eq!(app.form.fields.len(), 5);
        assert_eq!(app.form.fields[1].text, "3000000");
        assert_eq!(app.chart.revision, 1);
        assert_eq!(app.chart.revenue.title, "Revenue Breakdown");
        assert_eq!(app.chart.expense.title, "Expense Breakdown");
        assert_eq!(app.chart.revenue.slices.len(), 2);
        assert_eq!(app.chart.expense.slices.len(), 3);
        assert!(!app.modal.is_open());
        assert_eq!(app.interaction, InteractionState::Idle);
    }

    #[test]
    fn test_scenario_seed_data_is_imbalanced() {
        let mut app = create_test_app();

        let outcome = app.calculate_budget();

        assert_eq!(
            outcome,
            CalculationOutcome::Imbalanced(BudgetTotals::new(8_000_000.0, 7_500_000.0))
        );
        let dialog = app.modal.active_dialog.as_ref().unwrap();
        assert_eq!(dialog.kind, DialogKind::Warning);
        assert_eq!(
            dialog.message,
            "Total Revenue: $8000000.00\nTotal Expenses: $7500000.00\nBalance: $500000.00"
        );
        assert_eq!(app.chart.revision, 2);
        assert_eq!(app.interaction, InteractionState::Idle);
    }

    #[test]
    fn test_scenario_small_property_tax_cut_is_still_imbalanced() {
        let mut app = create_test_app();
        app.form.set_text("Property Tax", "4600000");

        let outcome = app.calculate_budget();

        match outcome {
            CalculationOutcome::Imbalanced(totals) => {
                assert_eq!(totals.total_revenue, 7_600_000.0);
                assert_eq!(totals.total_expenses, 7_500_000.0);
                assert_eq!(totals.balance, 100_000.0);
            }
            other => panic!("expected imbalance, got {:?}", other),
        }
        assert_eq!(amount_of(&app, "Property Tax"), 4_600_000.0);
    }

    #[test]
    fn test_scenario_property_tax_cut_reaches_balance() {
        let mut app = create_test_app();
        app.form.set_text("Property Tax", "4560000");

        let outcome = app.calculate_budget();

        assert_eq!(
            outcome,
            CalculationOutcome::Balanced(BudgetTotals::new(7_560_000.0, 7_500_000.0))
        );
        let dialog = app.modal.active_dialog.as_ref().unwrap();
        assert_eq!(dialog.kind, DialogKind::Success);
        assert_eq!(dialog.title, "Success");
        assert!(dialog.message.starts_with("Congratulations!"));
        assert!(dialog.message.contains("Balance: $60000.00"));

        // Revenue chart reflects the new amount
        let property_tax = &app.chart.revenue.slices[0];
        assert_eq!(property_tax.label, "Property Tax");
        assert_eq!(property_tax.amount, 4_560_000.0);
        assert!((app.chart.revenue.percentage_sum() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_scenario_invalid_sales_tax_changes_nothing() {
        let mut app = create_test_app();
        app.form.set_text("Property Tax", "1");
        app.form.set_text("Sales Tax", "abc");
        let revenue_before = app.chart.revenue.clone();
        let expense_before = app.chart.expense.clone();

        let outcome = app.calculate_budget();

        assert_eq!(
            outcome,
            CalculationOutcome::InvalidInput {
                category: "Sales Tax".to_string()
            }
        );
        let dialog = app.modal.active_dialog.as_ref().unwrap();
        assert_eq!(dialog.kind, DialogKind::Error);
        assert_eq!(dialog.message, "Invalid input for Sales Tax");

        // Model, charts and fields untouched
        assert_eq!(amount_of(&app, "Property Tax"), 5_000_000.0);
        assert_eq!(amount_of(&app, "Sales Tax"), 3_000_000.0);
        assert_eq!(app.chart.revision, 1);
        assert_eq!(app.chart.revenue, revenue_before);
        assert_eq!(app.chart.expense, expense_before);
        assert_eq!(app.form.fields[0].text, "1");
        assert_eq!(app.form.fields[1].text, "abc");
    }

    #[test]
    fn test_recovery_after_rejected_input() {
        let mut app = create_test_app();
        app.form.set_text("Sales Tax", "abc");
        assert!(matches!(app.calculate_budget(), CalculationOutcome::InvalidInput { .. }));
        app.modal.dismiss();

        app.form.set_text("Sales Tax", "2560000");
        app.form.set_text("Property Tax", "5000000");
        let outcome = app.calculate_budget();

        assert_eq!(
            outcome,
            CalculationOutcome::Balanced(BudgetTotals::new(7_560_000.0, 7_500_000.0))
        );
        assert_eq!(app.chart.revision, 2);
    }

    #[test]
    fn test_expense_chart_is_independent_of_revenue_edits() {
        let mut app = create_test_app();
        let expense_before = app.chart.expense.clone();

        app.form.set_text("Property Tax", "100");
        app.calculate_budget();

        assert_eq!(app.chart.expense, expense_before);
        assert!((app.chart.revenue.percentage_sum() - 100.0).abs() < 1e-9);
        assert!((app.chart.expense.percentage_sum() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_interaction_moves_through_editing_and_back() {
        let mut app = create_test_app();
        assert_eq!(app.interaction, InteractionState::Idle);

        app.set_interaction(InteractionState::Editing);
        assert_eq!(app.interaction, InteractionState::Editing);

        // Setting the same state twice is a no-op
        app.set_interaction(InteractionState::Editing);
        assert_eq!(app.interaction, InteractionState::Editing);

        app.set_interaction(InteractionState::Idle);
        assert_eq!(app.interaction, InteractionState::Idle);
    }

    #[test]
    fn test_calculate_returns_to_idle_after_editing() {
        let mut app = create_test_app();
        app.set_interaction(InteractionState::Editing);

        app.calculate_budget();

        assert_eq!(app.interaction, InteractionState::Idle);
    }
}
