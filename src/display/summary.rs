//! Budget status display formatting

use crate::config::Settings;
use crate::models::{Money, Period};

/// Format the budget status block: balance, period, days remaining,
/// and the suggested daily spending limit.
pub fn format_status(
    balance: Option<Money>,
    period: &Period,
    days_remaining: i64,
    daily_limit: Option<Money>,
    settings: &Settings,
) -> String {
    let mut output = String::new();

    let balance_display = match balance {
        Some(b) => b.format_with_symbol(&settings.currency_symbol),
        None => "(not set)".to_string(),
    };
    output.push_str(&format!("{:16} {}\n", "Balance:", balance_display));

    output.push_str(&format!(
        "{:16} {} ({} days)\n",
        "Period:",
        period,
        period.len_days()
    ));

    output.push_str(&format!("{:16} {}\n", "Days remaining:", days_remaining));

    let limit_display = match daily_limit {
        Some(l) => format!("{} per day", l.format_with_symbol(&settings.currency_symbol)),
        None => "(not set)".to_string(),
    };
    output.push_str(&format!("{:16} {}\n", "Daily limit:", limit_display));

    output
}
