//! Conversion between display-formatted amounts and [`Decimal`].
//!
//! Amounts are entered the Indonesian way: `.` groups thousands and `,`
//! separates the fraction, so `"1.250.000,50"` is one million two hundred
//! fifty thousand and a half.

use rust_decimal::Decimal;
use tracing::warn;

const GROUP_SEPARATOR: char = '.';
const FRACTION_SEPARATOR: char = ',';

/// Trims whitespace, drops group separators and turns the fraction
/// separator into a decimal point.
fn normalize_amount_input(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| *c != GROUP_SEPARATOR)
        .map(|c| if c == FRACTION_SEPARATOR { '.' } else { c })
        .collect()
}

/// Parses a user-entered amount into a [`Decimal`].
///
/// Empty and unparseable input both yield zero. This never fails: a bad
/// field is logged at `warn` and treated as if it were left blank.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use ratio_core::parse_amount;
///
/// assert_eq!(parse_amount("1.250.000"), dec!(1250000));
/// assert_eq!(parse_amount("1250000"), dec!(1250000));
/// assert_eq!(parse_amount("1.250.000,75"), dec!(1250000.75));
/// assert_eq!(parse_amount(""), dec!(0));
/// assert_eq!(parse_amount("n/a"), dec!(0));
/// ```
pub fn parse_amount(raw: &str) -> Decimal {
    let normalized = normalize_amount_input(raw);
    if normalized.is_empty() {
        return Decimal::ZERO;
    }
    normalized.parse().unwrap_or_else(|e| {
        warn!(input = %raw, "unparseable amount treated as zero: {}", e);
        Decimal::ZERO
    })
}

/// Formats an amount for display with `.` between thousands groups.
///
/// A non-zero fraction is written after `,`; trailing zeros are dropped.
/// The output always parses back to the same value with [`parse_amount`].
///
/// ```
/// use rust_decimal_macros::dec;
/// use ratio_core::format_thousands;
///
/// assert_eq!(format_thousands(dec!(1250000)), "1.250.000");
/// assert_eq!(format_thousands(dec!(-1500.50)), "-1.500,5");
/// assert_eq!(format_thousands(dec!(999)), "999");
/// ```
pub fn format_thousands(value: Decimal) -> String {
    let plain = value.abs().normalize().to_string();
    let (integer, fraction) = match plain.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (plain.as_str(), None),
    };

    let mut out = String::with_capacity(plain.len() + integer.len() / 3 + 1);
    if value.is_sign_negative() && !value.is_zero() {
        out.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(digit);
    }
    if let Some(fraction) = fraction {
        out.push(FRACTION_SEPARATOR);
        out.push_str(fraction);
    }
    out
}
