//! Employee rate profile and related types.
//!
//! The rate profile is the employee-side input to a payroll calculation: the
//! contracted rate, whether it is a salary or an hourly wage, and how often
//! the employee is paid.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Deserializer, Serialize};

/// Whether the contracted rate is a period salary or an hourly wage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateType {
    /// The rate is the amount paid per pay period.
    Salary,
    /// The rate is the amount paid per worked hour.
    Hourly,
}

/// How often the employee is paid.
///
/// Unknown wire values deliberately fall back to [`PayFrequency::Monthly`]
/// rather than failing deserialization; every downstream annualization
/// factor treats monthly as the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PayFrequency {
    /// Paid every week (52 periods per year).
    Weekly,
    /// Paid every second week (26 periods per year).
    BiWeekly,
    /// Paid every month (12 periods per year).
    #[default]
    Monthly,
}

impl PayFrequency {
    /// Returns the number of pay periods in a year for this frequency.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::PayFrequency;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(PayFrequency::Weekly.periods_per_year(), Decimal::from(52));
    /// assert_eq!(PayFrequency::Monthly.periods_per_year(), Decimal::from(12));
    /// ```
    pub fn periods_per_year(self) -> Decimal {
        match self {
            PayFrequency::Weekly => dec!(52),
            PayFrequency::BiWeekly => dec!(26),
            PayFrequency::Monthly => dec!(12),
        }
    }
}

impl<'de> Deserialize<'de> for PayFrequency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(match value.as_str() {
            "weekly" => PayFrequency::Weekly,
            "bi_weekly" | "bi-weekly" | "biweekly" => PayFrequency::BiWeekly,
            // Unknown frequencies fall back to monthly.
            _ => PayFrequency::Monthly,
        })
    }
}

/// The employee-side input to a payroll calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateProfile {
    /// The contracted rate, in ZAR. Period amount for salaried employees,
    /// hourly amount for hourly employees. Must be non-negative.
    pub rate: Decimal,
    /// Whether `rate` is a salary or an hourly wage.
    pub rate_type: RateType,
    /// How often the employee is paid.
    pub pay_frequency: PayFrequency,
}

impl RateProfile {
    /// Returns true if the employee is paid by the hour.
    pub fn is_hourly(&self) -> bool {
        self.rate_type == RateType::Hourly
    }
}
