//! Annualization of period amounts.
//!
//! PAYE is defined over annual income, so period figures are scaled up to a
//! full year before the brackets apply and the annual liability is scaled
//! back down to the period. Both directions always work from the period
//! figure; nothing here ever annualizes an already-annual amount.

use rust_decimal::Decimal;

use crate::models::PayFrequency;

/// Scales a period amount up to an annual amount (x52, x26 or x12).
///
/// Used for both gross-income and taxable-income annualization.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::annualize;
/// use payroll_engine::models::PayFrequency;
/// use rust_decimal::Decimal;
///
/// let annual = annualize(Decimal::from(25_000), PayFrequency::Monthly);
/// assert_eq!(annual, Decimal::from(300_000));
/// ```
pub fn annualize(period_amount: Decimal, pay_frequency: PayFrequency) -> Decimal {
    period_amount * pay_frequency.periods_per_year()
}

/// Scales an annual amount back down to a single pay period.
pub fn per_period(annual_amount: Decimal, pay_frequency: PayFrequency) -> Decimal {
    annual_amount / pay_frequency.periods_per_year()
}
