//! Service layer for perdiem
//!
//! The service layer sits between storage and presentation: the controller
//! owns the budget state, funnels every mutation, and drives persistence.

pub mod controller;

pub use controller::BudgetController;
