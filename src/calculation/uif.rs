//! UIF contribution calculation.

use rust_decimal::Decimal;

use crate::models::PayFrequency;
use crate::tables::{
    UIF_BIWEEKLY_CAP_DIVISOR, UIF_MONTHLY_CAP, UIF_RATE, UIF_WEEKLY_CAP_DIVISOR,
};

/// Calculates the UIF contribution for one pay period: 1% of gross pay,
/// capped.
///
/// The statutory cap is monthly (R177.12); weekly and bi-weekly periods use
/// the monthly cap scaled down by the average weeks per month (4.33) and
/// half-months (2.17) respectively. UIF is gross-based, never taxable-income
/// based.
///
/// The employer's contribution is the symmetric 1% and is computed with this
/// same function.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_uif;
/// use payroll_engine::models::PayFrequency;
/// use rust_decimal::Decimal;
///
/// // 1% of gross, under the cap.
/// let uif = calculate_uif(Decimal::from(15_000), PayFrequency::Monthly);
/// assert_eq!(uif, Decimal::from(150));
/// ```
pub fn calculate_uif(gross_pay: Decimal, pay_frequency: PayFrequency) -> Decimal {
    let cap = match pay_frequency {
        PayFrequency::Monthly => UIF_MONTHLY_CAP,
        PayFrequency::Weekly => (UIF_MONTHLY_CAP / UIF_WEEKLY_CAP_DIVISOR).round_dp(2),
        PayFrequency::BiWeekly => (UIF_MONTHLY_CAP / UIF_BIWEEKLY_CAP_DIVISOR).round_dp(2),
    };

    (gross_pay * UIF_RATE).min(cap).round_dp(2)
}
