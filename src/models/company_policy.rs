//! Company-side rate and compliance configuration.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// The company-side input to a payroll calculation.
///
/// The overtime multipliers default to the statutory-typical 1.5x and 2.0x
/// when a company leaves them unset. The compliance flags are configuration,
/// not computed: `sdl_contribution` already encodes the >R500k annual payroll
/// eligibility test, and `eligible_for_eti` encodes ETI registration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompanyRatePolicy {
    /// Multiplier applied to the hourly rate for overtime hours.
    #[serde(default = "default_overtime_rate")]
    pub overtime_rate: Decimal,
    /// Multiplier applied to the hourly rate for doubletime hours.
    #[serde(default = "default_doubletime_rate")]
    pub doubletime_rate: Decimal,
    /// Whether the company pays the Skills Development Levy.
    #[serde(default)]
    pub sdl_contribution: bool,
    /// Whether the company may claim the Employment Tax Incentive.
    #[serde(default)]
    pub eligible_for_eti: bool,
}

fn default_overtime_rate() -> Decimal {
    dec!(1.5)
}

fn default_doubletime_rate() -> Decimal {
    dec!(2.0)
}

impl Default for CompanyRatePolicy {
    fn default() -> Self {
        Self {
            overtime_rate: default_overtime_rate(),
            doubletime_rate: default_doubletime_rate(),
            sdl_contribution: false,
            eligible_for_eti: false,
        }
    }
}
