//! Display formatting for terminal output
//!
//! Provides utilities for formatting the budget state for terminal display:
//! the status block and the transaction register.

pub mod summary;
pub mod transaction;

pub use summary::format_status;
pub use transaction::{format_transaction_register, format_transaction_row};
