//! Transaction display formatting
//!
//! Provides utilities for formatting transactions for terminal display,
//! including single rows and the register view.

use crate::config::Settings;
use crate::models::{Money, Transaction};

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, settings: &Settings) -> String {
    let note = if txn.reason.is_empty() {
        "(no note)".to_string()
    } else {
        truncate(&txn.reason, 30)
    };

    format!(
        "{:10} {:>12}  {}",
        txn.date.format(&settings.date_format),
        txn.signed_amount().format_with_symbol(&settings.currency_symbol),
        note
    )
}

/// Format a list of transactions as a register
///
/// Transactions are shown in the order given (most recent first), capped
/// at `limit` rows, with a net-change footer.
pub fn format_transaction_register(
    transactions: &[Transaction],
    limit: usize,
    settings: &Settings,
) -> String {
    if transactions.is_empty() {
        return "No transactions recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:10} {:>12}  {}\n", "Date", "Amount", "Note"));
    output.push_str(&format!("{}\n", "-".repeat(50)));

    let shown = transactions.len().min(limit);
    for txn in &transactions[..shown] {
        output.push_str(&format_transaction_row(txn, settings));
        output.push('\n');
    }

    output.push_str(&format!("{}\n", "-".repeat(50)));

    let net: Money = transactions.iter().map(|t| t.signed_amount()).sum();
    output.push_str(&format!(
        "{:10} {:>12}\n",
        "Net change",
        net.format_with_symbol(&settings.currency_symbol)
    ));

    if shown < transactions.len() {
        output.push_str(&format!(
            "Showing {} of {} transactions\n",
            shown,
            transactions.len()
        ));
    }

    output
}

/// Truncate a string to a maximum display length, adding "..." if clipped
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let clipped: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", clipped)
    }
}
