//! # UI State Modules
//!
//! Per-concern state structs owned by `BudgetSimulatorApp`.
//!
//! - `form_state` - Editable text for each category row
//! - `chart_state` - Pie chart snapshots built from the model
//! - `modal_state` - The currently open result dialog, if any

pub mod chart_state;
pub mod form_state;
pub mod modal_state;

pub use chart_state::ChartState;
pub use form_state::{CategoryField, CategoryFormState};
pub use modal_state::{BudgetDialog, DialogKind, ModalState};

/// Where the window is in a single user interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    /// A category field has keyboard focus
    Editing,
    /// Inside `calculate_budget`
    Recomputing,
}
