pub mod budget_service;
pub mod models;

pub use budget_service::BudgetService;
pub use models::budget::{is_balanced, Budget, BudgetError};
