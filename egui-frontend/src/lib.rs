//! Federal Budget Simulator: edit revenue and expense line items, recompute
//! the totals and view the breakdowns as pie charts.

pub mod backend;
pub mod ui;
