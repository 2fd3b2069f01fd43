//! Gross pay calculation.

use rust_decimal::Decimal;

/// Sums the earnings components into gross pay.
///
/// Earnings only; taxes and deductions never enter this sum.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_gross_pay;
/// use rust_decimal::Decimal;
///
/// let gross = calculate_gross_pay(
///     Decimal::from(24_000),
///     Decimal::from(1_800),
///     Decimal::from(500),
///     Decimal::ZERO,
/// );
/// assert_eq!(gross, Decimal::from(26_300));
/// ```
pub fn calculate_gross_pay(
    basic_salary: Decimal,
    overtime: Decimal,
    allowances: Decimal,
    bonus: Decimal,
) -> Decimal {
    basic_salary + overtime + allowances + bonus
}
