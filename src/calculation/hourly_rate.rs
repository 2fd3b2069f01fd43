//! Rate normalization.
//!
//! Every downstream calculation that deals in hours needs an hourly rate,
//! whether the employee is contracted hourly or on a period salary.

use rust_decimal::Decimal;

use crate::models::{PayFrequency, RateType};
use crate::tables::STANDARD_WORK_YEAR_HOURS;

/// Normalizes a contracted rate to an hourly rate.
///
/// Hourly rates pass through unchanged. Salaries are annualized by the pay
/// frequency and divided by the standard 2080-hour work year (8 hours x
/// 5 days x 52 weeks).
///
/// No validation is performed here; a negative or zero rate flows through
/// the arithmetic unchanged and it is the caller's job to reject it first.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_hourly_rate;
/// use payroll_engine::models::{PayFrequency, RateType};
/// use rust_decimal::Decimal;
///
/// // Hourly rates are the identity.
/// let rate = calculate_hourly_rate(
///     Decimal::from(150),
///     RateType::Hourly,
///     PayFrequency::Monthly,
/// );
/// assert_eq!(rate, Decimal::from(150));
///
/// // R20,800 per month annualizes to R249,600, or R120/hour.
/// let rate = calculate_hourly_rate(
///     Decimal::from(20_800),
///     RateType::Salary,
///     PayFrequency::Monthly,
/// );
/// assert_eq!(rate, Decimal::from(120));
/// ```
pub fn calculate_hourly_rate(
    rate: Decimal,
    rate_type: RateType,
    pay_frequency: PayFrequency,
) -> Decimal {
    match rate_type {
        RateType::Hourly => rate,
        RateType::Salary => rate * pay_frequency.periods_per_year() / STANDARD_WORK_YEAR_HOURS,
    }
}
