//! Presentation helpers for payslip display.
//!
//! Formatting is not part of the numeric contract; these helpers exist for
//! the display layer and never feed back into a calculation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Formats a ZAR amount as `R 12 345.67` (space-grouped thousands, two
/// decimal places, South African convention). Negative amounts carry a
/// leading minus: `-R 1 234.56`.
///
/// # Examples
///
/// ```
/// use payroll_engine::format::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::from(1_234_567)), "R 1 234 567.00");
/// assert_eq!(format_currency(Decimal::new(-9_999_99, 2)), "-R 9 999.99");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(2).abs();
    let text = format!("{:.2}", rounded);
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    // Group the integral digits in threes from the right.
    let digits: Vec<char> = whole.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(*digit);
    }

    let sign = if amount.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}R {grouped}.{cents}")
}

/// Formats a fractional rate as a percentage: `0.18` becomes `18%`,
/// `0.185` becomes `18.5%`. Rounded to two decimal places of a percent.
///
/// # Examples
///
/// ```
/// use payroll_engine::format::format_percentage;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_percentage(Decimal::from_str("0.18").unwrap()), "18%");
/// assert_eq!(format_percentage(Decimal::from_str("0.015").unwrap()), "1.5%");
/// ```
pub fn format_percentage(rate: Decimal) -> String {
    let percent = (rate * dec!(100)).round_dp(2).normalize();
    format!("{percent}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// FMT-001: thousands grouping
    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(dec("0")), "R 0.00");
        assert_eq!(format_currency(dec("999")), "R 999.00");
        assert_eq!(format_currency(dec("1000")), "R 1 000.00");
        assert_eq!(format_currency(dec("25000.5")), "R 25 000.50");
        assert_eq!(format_currency(dec("1234567.89")), "R 1 234 567.89");
    }

    /// FMT-002: cents are rounded, not truncated
    #[test]
    fn test_currency_rounds_to_cents() {
        assert_eq!(format_currency(dec("177.125")), "R 177.12");
        assert_eq!(format_currency(dec("177.135")), "R 177.14");
        assert_eq!(format_currency(dec("4919.333")), "R 4 919.33");
    }

    /// FMT-003: negative amounts carry the sign before the symbol
    #[test]
    fn test_currency_negative() {
        assert_eq!(format_currency(dec("-1234.56")), "-R 1 234.56");
        // A sub-cent negative rounds to zero and drops the sign.
        assert_eq!(format_currency(dec("-0.001")), "R 0.00");
    }

    /// FMT-004: percentages drop trailing zeros
    #[test]
    fn test_percentage() {
        assert_eq!(format_percentage(dec("0.18")), "18%");
        assert_eq!(format_percentage(dec("0.45")), "45%");
        assert_eq!(format_percentage(dec("0.015")), "1.5%");
        assert_eq!(format_percentage(dec("1")), "100%");
        assert_eq!(format_percentage(dec("0")), "0%");
    }

    /// FMT-005: percentage rounding
    #[test]
    fn test_percentage_rounds() {
        assert_eq!(format_percentage(dec("0.12346")), "12.35%");
        // Midpoints round to even, matching the monetary rounding.
        assert_eq!(format_percentage(dec("0.12345")), "12.34%");
    }
}
