//! # UI Module
//!
//! Re-exports the UI pieces of the budget simulator so other modules can
//! `use crate::ui::*`.

pub mod app_coordinator;
pub mod app_state;
pub mod components;
pub mod state;

pub use app_state::*;
pub use components::*;
