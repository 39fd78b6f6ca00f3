//! Pricing
//!
//! Catalog prices are display strings such as `"NT$1,200"`. Totals are
//! computed from the digits alone, which is lossy and locale-blind on purpose:
//! `"NT$1,200"` and `"1.200 TWD"` both count as `1200`.

/// Extract the numeric value of a formatted price string.
///
/// Every character that is not an ASCII digit is dropped and the remaining
/// digits are read as a base-10 integer. A string with no digits is `0`.
/// Values too large for a `u64` saturate at `u64::MAX`.
pub fn parse_numeric(price: &str) -> u64 {
    price
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0_u64, |value, digit| {
            value
                .saturating_mul(10)
                .saturating_add(u64::from(digit - b'0'))
        })
}

/// Price of `quantity` units of an item priced at `price`.
pub fn line_total(price: &str, quantity: u32) -> u64 {
    parse_numeric(price).saturating_mul(u64::from(quantity))
}
