//! Transaction model
//!
//! A transaction is an immutable record of a single credit or debit against
//! the budget balance. Direction is carried by the kind; the amount is always
//! the non-negative magnitude.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Credit: money added to the balance
    Add,
    /// Debit: money subtracted from the balance
    Sub,
}

impl TransactionKind {
    /// Derive the kind from a signed amount (negative means debit)
    pub fn from_signed(amount: Money) -> Self {
        if amount.is_negative() {
            Self::Sub
        } else {
            Self::Add
        }
    }

    /// Sign multiplier for balance arithmetic
    pub const fn sign(&self) -> i64 {
        match self {
            Self::Add => 1,
            Self::Sub => -1,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "Add"),
            Self::Sub => write!(f, "Sub"),
        }
    }
}

/// A single credit or debit against the balance
///
/// Transactions are never edited or deleted individually; only a full reset
/// clears the log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// When the transaction was recorded
    #[serde(rename = "dateISO")]
    pub date: DateTime<Utc>,

    /// Credit or debit
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Magnitude of the change, always non-negative
    pub amount: Money,

    /// Optional free-text note, may be empty
    #[serde(default)]
    pub reason: String,
}

impl Transaction {
    /// Create a new transaction recorded at the current instant
    ///
    /// The amount is stored as a magnitude; a negative input is normalized
    /// with `abs`.
    pub fn new(kind: TransactionKind, amount: Money, reason: impl Into<String>) -> Self {
        Self {
            id: TransactionId::new(),
            date: Utc::now(),
            kind,
            amount: amount.abs(),
            reason: reason.into(),
        }
    }

    /// The amount with its direction applied
    pub fn signed_amount(&self) -> Money {
        Money::from_cents(self.kind.sign() * self.amount.cents())
    }

    /// Check if this is a credit
    pub fn is_credit(&self) -> bool {
        self.kind == TransactionKind::Add
    }

    /// Check if this is a debit
    pub fn is_debit(&self) -> bool {
        self.kind == TransactionKind::Sub
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.signed_amount(),
            self.reason
        )
    }
}
