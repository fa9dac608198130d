//! # Modal State Module
//!
//! The result dialog opened by the "Calculate" action. At most one dialog is
//! open at a time and the main panel is disabled while it is.

use shared::BudgetTotals;

/// Visual variant of a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    /// Invalid numeric input
    Error,
    /// Balance within tolerance
    Success,
    /// Balance outside tolerance
    Warning,
}

impl DialogKind {
    pub fn icon(&self) -> &'static str {
        match self {
            DialogKind::Error => "❌",
            DialogKind::Success => "✅",
            DialogKind::Warning => "⚠",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetDialog {
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
}

impl BudgetDialog {
    /// Error dialog for a field that failed to parse
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }

    pub fn balanced(totals: &BudgetTotals) -> Self {
        Self {
            kind: DialogKind::Success,
            title: "Success".to_string(),
            message: format!(
                "Congratulations! You've achieved fiscal sustainability.\n\n{}",
                totals.summary_message()
            ),
        }
    }

    pub fn imbalanced(totals: &BudgetTotals) -> Self {
        Self {
            kind: DialogKind::Warning,
            title: "Budget Imbalance".to_string(),
            message: totals.summary_message(),
        }
    }
}

/// Modal visibility and content
#[derive(Debug, Default)]
pub struct ModalState {
    pub active_dialog: Option<BudgetDialog>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, dialog: BudgetDialog) {
        self.active_dialog = Some(dialog);
    }

    pub fn dismiss(&mut self) {
        self.active_dialog = None;
    }

    pub fn is_open(&self) -> bool {
        self.active_dialog.is_some()
    }
}
