//! Transaction CLI commands
//!
//! Implements the commands that record transactions and show the log.

use crate::config::Settings;
use crate::display::format_transaction_register;
use crate::error::PerdiemResult;
use crate::models::Money;
use crate::services::BudgetController;

/// Record a signed transaction against the balance
///
/// `negate` flips the sign for the `spend` command. An unparseable amount,
/// a zero amount, or an unset balance is a silent no-op: nothing changes
/// and nothing is printed.
pub fn handle_record(
    controller: &mut BudgetController,
    settings: &Settings,
    amount: &str,
    note: Option<String>,
    negate: bool,
) -> PerdiemResult<()> {
    let Ok(parsed) = Money::parse(amount) else {
        return Ok(());
    };
    let amount = if negate { -parsed } else { parsed };
    let note = note.unwrap_or_default();

    let Some(txn) = controller.record_transaction(amount, &note) else {
        return Ok(());
    };

    let verb = if txn.is_credit() { "Added" } else { "Spent" };
    let magnitude = txn.amount.format_with_symbol(&settings.currency_symbol);
    if txn.reason.is_empty() {
        println!("{} {}", verb, magnitude);
    } else {
        println!("{} {} ({})", verb, magnitude, txn.reason);
    }

    if let Some(balance) = controller.balance() {
        println!(
            "Balance: {}",
            balance.format_with_symbol(&settings.currency_symbol)
        );
    }
    if let Some(limit) = controller.daily_limit() {
        println!(
            "Daily limit: {} per day",
            limit.format_with_symbol(&settings.currency_symbol)
        );
    }

    Ok(())
}

/// Show the transaction log, most recent first
pub fn handle_log(
    controller: &BudgetController,
    settings: &Settings,
    limit: usize,
) -> PerdiemResult<()> {
    println!("Transaction Log");
    println!("{}", "=".repeat(50));
    print!(
        "{}",
        format_transaction_register(controller.transactions(), limit, settings)
    );
    Ok(())
}
