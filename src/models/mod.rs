//! Core data models for perdiem
//!
//! This module contains the data structures of the budgeting domain: money,
//! transactions, the accounting period, and the whole-state aggregate.

pub mod ids;
pub mod money;
pub mod period;
pub mod state;
pub mod transaction;

pub use ids::TransactionId;
pub use money::Money;
pub use period::Period;
pub use state::BudgetState;
pub use transaction::{Transaction, TransactionKind};
