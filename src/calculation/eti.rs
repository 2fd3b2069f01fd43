//! Employment Tax Incentive calculation.
//!
//! The ETI is a credit against the employer's PAYE liability for qualifying
//! young hires. The SARS schedule for the first twelve qualifying months is
//! a three-band sliding scale over monthly remuneration:
//!
//! | monthly remuneration | incentive                        |
//! |----------------------|----------------------------------|
//! | below R2,000         | 50% of remuneration              |
//! | R2,000 to R4,499.99  | R1,000 flat                      |
//! | R4,500 to R6,499.99  | R1,000 - 50% x (remuneration - R4,500) |
//! | R6,500 and above     | nil                              |

use rust_decimal::Decimal;

use crate::tables::{
    ETI_FULL_BAND_CEILING, ETI_HALF_RATE, ETI_MAX_AGE, ETI_MIN_AGE, ETI_MONTHLY_CAP,
    ETI_SALARY_CEILING, ETI_TAPER_FLOOR,
};

/// Calculates the monthly Employment Tax Incentive for one employee.
///
/// Qualifying requires a known age inside the 18-29 window and monthly
/// remuneration under the R6,500 ceiling; anything else earns zero. Company
/// eligibility (`eligible_for_eti`) is the orchestrator's concern, not
/// checked here.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_eti;
/// use rust_decimal::Decimal;
///
/// // A 24-year-old on R3,500/month earns the full R1,000 incentive.
/// let eti = calculate_eti(Decimal::from(3_500), Some(24));
/// assert_eq!(eti, Decimal::from(1_000));
///
/// // Over the ceiling earns nothing.
/// let eti = calculate_eti(Decimal::from(7_000), Some(24));
/// assert_eq!(eti, Decimal::ZERO);
/// ```
pub fn calculate_eti(gross_pay: Decimal, employee_age: Option<u32>) -> Decimal {
    let Some(age) = employee_age else {
        // Unknown age cannot be shown to qualify.
        return Decimal::ZERO;
    };
    if !(ETI_MIN_AGE..=ETI_MAX_AGE).contains(&age) {
        return Decimal::ZERO;
    }
    if gross_pay >= ETI_SALARY_CEILING {
        return Decimal::ZERO;
    }

    let incentive = if gross_pay < ETI_FULL_BAND_CEILING {
        gross_pay * ETI_HALF_RATE
    } else if gross_pay < ETI_TAPER_FLOOR {
        ETI_MONTHLY_CAP
    } else {
        ETI_MONTHLY_CAP - (gross_pay - ETI_TAPER_FLOOR) * ETI_HALF_RATE
    };

    incentive.clamp(Decimal::ZERO, ETI_MONTHLY_CAP).round_dp(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// ETI-001: lower band is 50% of remuneration
    #[test]
    fn test_lower_band() {
        assert_eq!(calculate_eti(dec("1500"), Some(22)), dec("750"));
        assert_eq!(calculate_eti(dec("1999.98"), Some(22)), dec("999.99"));
    }

    /// ETI-002: flat band pays the full cap
    #[test]
    fn test_flat_band() {
        assert_eq!(calculate_eti(dec("2000"), Some(22)), dec("1000"));
        assert_eq!(calculate_eti(dec("3500"), Some(22)), dec("1000"));
        assert_eq!(calculate_eti(dec("4499.99"), Some(22)), dec("1000"));
    }

    /// ETI-003: taper declines linearly to zero at the ceiling
    #[test]
    fn test_taper_band() {
        assert_eq!(calculate_eti(dec("4500"), Some(22)), dec("1000"));
        assert_eq!(calculate_eti(dec("5500"), Some(22)), dec("500"));
        assert_eq!(calculate_eti(dec("6499.98"), Some(22)), dec("0.01"));
    }

    /// ETI-004: at and above the salary ceiling earns nothing
    #[test]
    fn test_salary_ceiling() {
        assert_eq!(calculate_eti(dec("6500"), Some(22)), Decimal::ZERO);
        assert_eq!(calculate_eti(dec("10000"), Some(22)), Decimal::ZERO);
    }

    /// ETI-005: age window edges, 18-29 inclusive
    #[test]
    fn test_age_window() {
        assert_eq!(calculate_eti(dec("3500"), Some(17)), Decimal::ZERO);
        assert_eq!(calculate_eti(dec("3500"), Some(18)), dec("1000"));
        assert_eq!(calculate_eti(dec("3500"), Some(29)), dec("1000"));
        assert_eq!(calculate_eti(dec("3500"), Some(30)), Decimal::ZERO);
    }

    /// ETI-006: unknown age never qualifies
    #[test]
    fn test_unknown_age() {
        assert_eq!(calculate_eti(dec("3500"), None), Decimal::ZERO);
    }

    /// ETI-007: zero remuneration earns zero
    #[test]
    fn test_zero_remuneration() {
        assert_eq!(calculate_eti(Decimal::ZERO, Some(22)), Decimal::ZERO);
    }
}
