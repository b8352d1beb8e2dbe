//! Storage layer for perdiem
//!
//! Provides single-snapshot JSON persistence with atomic writes and
//! automatic directory creation.

pub mod store;

pub use store::BudgetStore;
