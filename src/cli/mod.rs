//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the controller.

pub mod budget;
pub mod transaction;

pub use budget::{handle_balance, handle_period, handle_reset, handle_status};
pub use transaction::{handle_log, handle_record};
