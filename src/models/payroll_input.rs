//! Payroll calculation input models.
//!
//! [`PayrollInput`] aggregates everything a single calculation needs: the
//! employee's rate profile, the company's rate policy, the pay period
//! descriptor, worked hours, earnings adjustments, deductions and the
//! employee's tax context. Optional numeric fields default to zero at the
//! deserialization boundary so the calculation functions never deal with
//! missing values.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CompanyRatePolicy, RateProfile};
use crate::error::{EngineError, EngineResult};

/// The pay period a calculation covers.
///
/// The dates are opaque, caller-supplied strings. The engine never parses
/// them and never consults a clock, which keeps the calculation bit-for-bit
/// reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayPeriod {
    /// First day of the period.
    pub start: String,
    /// Last day of the period.
    pub end: String,
    /// The date the employee is paid.
    pub pay_date: String,
}

/// All inputs to a single payroll calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollInput {
    /// The employee's contracted rate profile.
    pub employee: RateProfile,
    /// The company's rate and compliance configuration.
    #[serde(default)]
    pub company: CompanyRatePolicy,
    /// The pay period descriptor.
    #[serde(default)]
    pub pay_period: PayPeriod,

    /// Ordinary hours worked (only used for hourly employees).
    #[serde(default)]
    pub regular_hours: Decimal,
    /// Hours paid at the company's overtime multiplier.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Hours paid at the company's doubletime multiplier.
    #[serde(default)]
    pub doubletime_hours: Decimal,

    /// Taxable allowances paid this period.
    #[serde(default)]
    pub allowances: Decimal,
    /// Bonus paid this period.
    #[serde(default)]
    pub bonus: Decimal,

    /// Pre-tax medical aid contribution.
    #[serde(default)]
    pub medical_aid_contribution: Decimal,
    /// Pre-tax pension fund contribution.
    #[serde(default)]
    pub pension_fund_contribution: Decimal,
    /// Pre-tax retirement annuity contribution.
    #[serde(default)]
    pub retirement_annuity_contribution: Decimal,

    /// Post-tax medical aid amount.
    #[serde(default)]
    pub medical_aid_post_tax: Decimal,
    /// Other post-tax deductions (garnishees, loan repayments and so on).
    #[serde(default)]
    pub other_deductions: Decimal,

    /// The employee's age in years, if known. Drives rebates and ETI.
    #[serde(default)]
    pub employee_age: Option<u32>,
    /// Whether the employee belongs to a registered medical aid scheme.
    #[serde(default)]
    pub has_medical_aid: bool,
    /// Number of medical aid dependants.
    #[serde(default)]
    pub medical_aid_dependants: u32,
}

impl PayrollInput {
    /// Checks the input for values the engine's arithmetic would happily
    /// accept but that are nonsensical for payroll.
    ///
    /// The calculation path itself performs unchecked arithmetic; callers
    /// at the schema/API boundary are expected to run this first.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{PayrollInput, RateProfile, RateType, PayFrequency};
    /// use rust_decimal::Decimal;
    ///
    /// let input = PayrollInput {
    ///     employee: RateProfile {
    ///         rate: Decimal::from(25_000),
    ///         rate_type: RateType::Salary,
    ///         pay_frequency: PayFrequency::Monthly,
    ///     },
    ///     ..PayrollInput::for_employee(Decimal::from(25_000))
    /// };
    /// assert!(input.validate().is_ok());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        let amounts = [
            ("rate", self.employee.rate),
            ("allowances", self.allowances),
            ("bonus", self.bonus),
            ("medical_aid_contribution", self.medical_aid_contribution),
            ("pension_fund_contribution", self.pension_fund_contribution),
            (
                "retirement_annuity_contribution",
                self.retirement_annuity_contribution,
            ),
            ("medical_aid_post_tax", self.medical_aid_post_tax),
            ("other_deductions", self.other_deductions),
        ];
        for (field, value) in amounts {
            if value < Decimal::ZERO {
                return Err(EngineError::NegativeAmount { field, value });
            }
        }

        let hours = [
            ("regular_hours", self.regular_hours),
            ("overtime_hours", self.overtime_hours),
            ("doubletime_hours", self.doubletime_hours),
        ];
        for (field, value) in hours {
            if value < Decimal::ZERO {
                return Err(EngineError::NegativeHours { field, value });
            }
        }

        let multipliers = [
            ("overtime_rate", self.company.overtime_rate),
            ("doubletime_rate", self.company.doubletime_rate),
        ];
        for (field, value) in multipliers {
            if value < Decimal::ZERO {
                return Err(EngineError::NegativeMultiplier { field, value });
            }
        }

        Ok(())
    }

    /// Creates a monthly salaried input with the given rate and everything
    /// else defaulted. Convenient starting point for struct update syntax.
    pub fn for_employee(rate: Decimal) -> Self {
        Self {
            employee: RateProfile {
                rate,
                rate_type: super::RateType::Salary,
                pay_frequency: super::PayFrequency::Monthly,
            },
            company: CompanyRatePolicy::default(),
            pay_period: PayPeriod::default(),
            regular_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            doubletime_hours: Decimal::ZERO,
            allowances: Decimal::ZERO,
            bonus: Decimal::ZERO,
            medical_aid_contribution: Decimal::ZERO,
            pension_fund_contribution: Decimal::ZERO,
            retirement_annuity_contribution: Decimal::ZERO,
            medical_aid_post_tax: Decimal::ZERO,
            other_deductions: Decimal::ZERO,
            employee_age: None,
            has_medical_aid: false,
            medical_aid_dependants: 0,
        }
    }
}
