//! Whole-budget state aggregate
//!
//! Everything the app persists in one record: the running balance, the
//! transaction log, and the accounting period. The on-disk record shape is
//! owned by the storage layer.

use super::money::Money;
use super::period::Period;
use super::transaction::Transaction;

/// The complete in-memory budget state
///
/// Owned exclusively by the controller; storage only ever sees a serialized
/// snapshot of it.
#[derive(Debug, Clone, Default)]
pub struct BudgetState {
    /// Running balance, None until a starting balance is first set
    pub balance: Option<Money>,

    /// Transaction log, most recent first
    pub transactions: Vec<Transaction>,

    /// The period the balance is planned over
    pub period: Period,
}

impl BudgetState {
    /// Put a transaction at the front of the log, keeping most-recent-first order
    pub fn prepend_transaction(&mut self, transaction: Transaction) {
        self.transactions.insert(0, transaction);
    }
}
