//! Price display.

use rusty_money::{Money, iso};

/// Format a whole-dollar total as New Taiwan dollars.
pub fn format_total(amount: u64) -> String {
    let minor = i64::try_from(amount)
        .unwrap_or(i64::MAX)
        .saturating_mul(100);

    Money::from_minor(minor, iso::TWD).to_string()
}
