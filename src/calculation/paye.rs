//! PAYE tax calculation.
//!
//! PAYE is computed in five steps, all over annual ZAR amounts:
//!
//! 1. Progressive bracket tax from the SARS bracket table.
//! 2. Age-based rebates (primary, plus secondary at 65, plus tertiary at 75).
//! 3. Medical scheme fees tax credits, a monthly figure annualized x12.
//! 4. The annual liability, floored at zero so rebates and credits can never
//!    produce negative tax.
//! 5. Division back down to the employee's pay period.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::per_period;
use crate::models::PayFrequency;
use crate::tables::{
    MEDICAL_CREDIT_ADDITIONAL_DEPENDANT, MEDICAL_CREDIT_FIRST_DEPENDANT,
    MEDICAL_CREDIT_MAIN_MEMBER, PRIMARY_REBATE, SECONDARY_REBATE, SECONDARY_REBATE_AGE,
    TAX_BRACKETS, TERTIARY_REBATE, TERTIARY_REBATE_AGE,
};

/// Computes the annual bracket tax before any rebates or credits.
///
/// The bracket table encodes, for each bracket, the cumulative tax owed at
/// its lower bound (`threshold`), so only the single bracket the income
/// falls into needs to be evaluated: the highest bracket whose `min` is
/// strictly below the income. Income at or below zero owes nothing.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::annual_tax_before_rebates;
/// use rust_decimal::Decimal;
///
/// // 300,000 falls in the 26% bracket: 42,678 + (300,000 - 237,101) * 0.26
/// let tax = annual_tax_before_rebates(Decimal::from(300_000));
/// assert_eq!(tax, Decimal::from_str_exact("59031.74").unwrap());
/// ```
pub fn annual_tax_before_rebates(annual_taxable_income: Decimal) -> Decimal {
    let Some(bracket) = TAX_BRACKETS
        .iter()
        .rev()
        .find(|bracket| bracket.min < annual_taxable_income)
    else {
        return Decimal::ZERO;
    };

    let taxable_in_bracket = match bracket.max {
        Some(max) => (annual_taxable_income - bracket.min).min(max - bracket.min),
        None => annual_taxable_income - bracket.min,
    };

    bracket.threshold + taxable_in_bracket * bracket.rate
}

/// Sums the annual rebates for an employee's age.
///
/// The primary rebate always applies. The secondary and tertiary rebates
/// are cumulative, not mutually exclusive: a 75-year-old receives all three.
/// An unknown age receives the primary rebate only.
pub fn total_rebates(employee_age: Option<u32>) -> Decimal {
    let mut rebates = PRIMARY_REBATE;
    if let Some(age) = employee_age {
        if age >= SECONDARY_REBATE_AGE {
            rebates += SECONDARY_REBATE;
        }
        if age >= TERTIARY_REBATE_AGE {
            rebates += TERTIARY_REBATE;
        }
    }
    rebates
}

/// Computes the monthly medical scheme fees tax credit.
///
/// Without medical aid the credit is zero regardless of dependants. With
/// medical aid: 364 for the main member, another 364 for the first
/// dependant, and 246 for each dependant beyond the first.
pub fn monthly_medical_credit(has_medical_aid: bool, medical_aid_dependants: u32) -> Decimal {
    if !has_medical_aid {
        return Decimal::ZERO;
    }

    let mut credit = MEDICAL_CREDIT_MAIN_MEMBER;
    if medical_aid_dependants > 0 {
        credit += MEDICAL_CREDIT_FIRST_DEPENDANT;
        credit +=
            MEDICAL_CREDIT_ADDITIONAL_DEPENDANT * Decimal::from(medical_aid_dependants - 1);
    }
    credit
}

/// Calculates the per-period PAYE liability, rounded to cents.
///
/// Takes the *annual* taxable income (see
/// [`annualize`](crate::calculation::annualize)) plus the employee's tax
/// context, and returns the amount to withhold for one pay period. Never
/// negative: rebates and credits floor the annual liability at zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_paye;
/// use payroll_engine::models::PayFrequency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // 300,000 annual taxable income, no age or medical context:
/// // bracket tax 59,031.74 less the 17,235 primary rebate, over 12 months.
/// let paye = calculate_paye(
///     Decimal::from(300_000),
///     PayFrequency::Monthly,
///     None,
///     false,
///     0,
/// );
/// assert_eq!(paye, Decimal::from_str("3483.06").unwrap());
/// ```
pub fn calculate_paye(
    annual_taxable_income: Decimal,
    pay_frequency: PayFrequency,
    employee_age: Option<u32>,
    has_medical_aid: bool,
    medical_aid_dependants: u32,
) -> Decimal {
    let annual_tax = annual_tax_before_rebates(annual_taxable_income);
    let rebates = total_rebates(employee_age);
    let annual_credits = monthly_medical_credit(has_medical_aid, medical_aid_dependants) * dec!(12);

    let annual_after_credits = (annual_tax - rebates - annual_credits).max(Decimal::ZERO);

    per_period(annual_after_credits, pay_frequency).round_dp(2)
}
