//! Budget CLI commands
//!
//! Implements the commands that act on the budget as a whole: the status
//! overview, the starting balance, the period, and reset.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::display::format_status;
use crate::error::PerdiemResult;
use crate::models::{Money, Period};
use crate::services::BudgetController;

/// Show balance, period, days remaining, and the suggested daily limit
pub fn handle_status(controller: &BudgetController, settings: &Settings) -> PerdiemResult<()> {
    println!("Budget Status");
    println!("{}", "=".repeat(50));
    print!(
        "{}",
        format_status(
            controller.balance(),
            controller.period(),
            controller.days_remaining(),
            controller.daily_limit(),
            settings,
        )
    );
    Ok(())
}

/// Set the starting balance
///
/// An unparseable or negative amount unsets the balance; that path prints
/// nothing, matching the silent-fallback policy for bad input.
pub fn handle_balance(
    controller: &mut BudgetController,
    settings: &Settings,
    amount: &str,
) -> PerdiemResult<()> {
    controller.set_starting_balance(Money::parse(amount).ok());

    if let Some(balance) = controller.balance() {
        println!(
            "Starting balance set to {}",
            balance.format_with_symbol(&settings.currency_symbol)
        );
        if let Some(limit) = controller.daily_limit() {
            println!(
                "Daily limit: {} per day",
                limit.format_with_symbol(&settings.currency_symbol)
            );
        }
    }
    Ok(())
}

/// Set the budget period, or show it when no dates were given
///
/// A malformed, reversed, or partial pair of bounds falls back to the
/// current calendar month.
pub fn handle_period(
    controller: &mut BudgetController,
    start: Option<String>,
    end: Option<String>,
) -> PerdiemResult<()> {
    if start.is_none() && end.is_none() {
        println!(
            "Period: {} ({} days)",
            controller.period(),
            controller.period().len_days()
        );
        println!("Days remaining: {}", controller.days_remaining());
        return Ok(());
    }

    let period = match (start.as_deref(), end.as_deref()) {
        (Some(start), Some(end)) => parse_period(start, end),
        _ => None,
    };
    controller.set_period(period);

    println!(
        "Period set to {} ({} days)",
        controller.period(),
        controller.period().len_days()
    );
    Ok(())
}

/// Restore the budget to its defaults
///
/// Refuses without `--yes` so a bare `reset` cannot wipe the log.
pub fn handle_reset(controller: &mut BudgetController, yes: bool) -> PerdiemResult<()> {
    if !yes {
        println!("This clears the balance, the transaction log, and the period.");
        println!("Run 'perdiem reset --yes' to confirm.");
        return Ok(());
    }

    controller.reset();
    println!("Budget reset. Period is now {}.", controller.period());
    Ok(())
}

fn parse_period(start: &str, end: &str) -> Option<Period> {
    let start = NaiveDate::parse_from_str(start, "%Y-%m-%d").ok()?;
    let end = NaiveDate::parse_from_str(end, "%Y-%m-%d").ok()?;
    Period::new(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_period() {
        let period = parse_period("2024-06-01", "2024-06-30").unwrap();
        assert_eq!(period.len_days(), 30);
    }

    #[test]
    fn test_parse_period_rejects_bad_input() {
        assert!(parse_period("June 1st", "2024-06-30").is_none());
        assert!(parse_period("2024-06-30", "2024-06-01").is_none());
    }
}
