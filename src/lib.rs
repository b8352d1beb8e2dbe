//! perdiem - Terminal daily-budget tracker
//!
//! This library provides the core functionality for the perdiem budget
//! tracker. A starting balance is spread over a date period to suggest a
//! daily spending limit; transactions adjust the balance and the whole state
//! lives in one local JSON snapshot.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, periods, state)
//! - `engine`: Pure budget math (days remaining, daily limit, applying transactions)
//! - `storage`: JSON snapshot storage layer
//! - `services`: The controller owning state and persistence policy
//! - `display`: Plain-text formatting for the terminal
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use perdiem::config::{PerdiemPaths, Settings};
//! use perdiem::services::BudgetController;
//! use perdiem::storage::BudgetStore;
//!
//! let paths = PerdiemPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut controller = BudgetController::new(BudgetStore::new(&paths)?);
//! controller.initialize();
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{PerdiemError, PerdiemResult};
