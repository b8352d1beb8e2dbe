//! Budget math
//!
//! Pure functions over the domain types: no I/O, no clock, no stored state.
//! Callers supply "today" so the math stays deterministic.

use chrono::NaiveDate;

use crate::models::{Money, Period, Transaction, TransactionKind};

/// Days left in the period as of `today`, counting today itself
///
/// The count runs from max(today, period start) through the period end,
/// inclusive on both sides, so a period that has not started yet counts its
/// full length. Zero once the period is over; never negative.
pub fn days_remaining(period: &Period, today: NaiveDate) -> i64 {
    let effective_start = today.max(period.start());
    if period.end() < effective_start {
        return 0;
    }
    (period.end() - effective_start).num_days() + 1
}

/// Suggested spending limit per day: the balance spread over the remaining days
///
/// Rounded to the nearest cent. Zero when no days remain, which also keeps
/// the division well-defined.
pub fn daily_limit(balance: Money, days_remaining: i64) -> Money {
    if days_remaining > 0 {
        balance.div_round(days_remaining)
    } else {
        Money::zero()
    }
}

/// Apply a signed amount to the balance, producing the transaction to log
///
/// A zero amount is a no-op and yields None. A positive amount is a credit,
/// a negative amount a debit; the returned transaction carries the magnitude
/// and the derived kind.
pub fn apply_transaction(
    balance: Money,
    amount: Money,
    reason: &str,
) -> Option<(Money, Transaction)> {
    if amount.is_zero() {
        return None;
    }

    let kind = TransactionKind::from_signed(amount);
    let transaction = Transaction::new(kind, amount.abs(), reason);
    Some((balance + amount, transaction))
}
