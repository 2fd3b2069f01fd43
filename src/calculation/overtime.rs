//! Overtime pay calculation.

use rust_decimal::Decimal;

/// Calculates overtime and doubletime pay.
///
/// The multipliers come from the company's rate policy; the
/// statutory-typical values are 1.5x and 2.0x and
/// [`crate::models::CompanyRatePolicy`] defaults to them when unset.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_overtime_pay;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // 5h at 1.5x plus 2h at 2.0x on a R150/hour rate:
/// // 150*5*1.5 + 150*2*2.0 = 1125 + 600 = 1725
/// let pay = calculate_overtime_pay(
///     Decimal::from(150),
///     Decimal::from(5),
///     Decimal::from(2),
///     Decimal::from_str("1.5").unwrap(),
///     Decimal::from_str("2.0").unwrap(),
/// );
/// assert_eq!(pay, Decimal::from(1725));
/// ```
pub fn calculate_overtime_pay(
    hourly_rate: Decimal,
    overtime_hours: Decimal,
    doubletime_hours: Decimal,
    overtime_rate: Decimal,
    doubletime_rate: Decimal,
) -> Decimal {
    hourly_rate * overtime_hours * overtime_rate
        + hourly_rate * doubletime_hours * doubletime_rate
}
