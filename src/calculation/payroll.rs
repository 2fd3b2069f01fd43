//! Payroll orchestration.
//!
//! Ties the individual calculation steps together into one payslip. The
//! orchestrator owns the ordering rules the individual functions cannot see:
//! pre-tax deductions come off before the PAYE base is annualized, UIF is
//! gross-based, and the employer-side amounts never touch the employee's
//! net pay.

use rust_decimal::Decimal;
use tracing::debug;

use super::{
    annualize, calculate_eti, calculate_gross_pay, calculate_hourly_rate, calculate_overtime_pay,
    calculate_paye, calculate_sdl, calculate_uif,
};
use crate::models::{
    EmployerContributions, PayBreakdown, PayrollCalculation, PayrollInput, RateType,
};

/// Calculates a complete, internally consistent payroll breakdown.
///
/// Pure and deterministic: identical input yields bit-identical output. The
/// engine performs no validation; run
/// [`PayrollInput::validate`](crate::models::PayrollInput::validate) at the
/// boundary first if the input is untrusted. Monetary outputs are rounded to
/// cents, component-first, so the decomposition invariants hold exactly on
/// the rounded figures.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_payroll;
/// use payroll_engine::models::PayrollInput;
/// use rust_decimal::Decimal;
///
/// let input = PayrollInput::for_employee(Decimal::from(25_000));
/// let payslip = calculate_payroll(&input);
///
/// assert_eq!(payslip.gross_pay, Decimal::from(25_000));
/// assert_eq!(
///     payslip.net_pay,
///     payslip.gross_pay - payslip.total_deductions
/// );
/// ```
pub fn calculate_payroll(input: &PayrollInput) -> PayrollCalculation {
    let employee = &input.employee;
    let company = &input.company;
    let pay_frequency = employee.pay_frequency;

    // Step 1: rate normalization.
    let hourly_rate = calculate_hourly_rate(employee.rate, employee.rate_type, pay_frequency);
    debug!(%hourly_rate, rate_type = ?employee.rate_type, "normalized rate");

    // Step 2: basic salary. Salaried employees are paid the configured
    // period amount as-is, never re-derived from hours.
    let basic_salary = match employee.rate_type {
        RateType::Salary => employee.rate,
        RateType::Hourly => hourly_rate * input.regular_hours,
    }
    .round_dp(2);

    // Step 3: overtime at the company's multipliers.
    let overtime = calculate_overtime_pay(
        hourly_rate,
        input.overtime_hours,
        input.doubletime_hours,
        company.overtime_rate,
        company.doubletime_rate,
    )
    .round_dp(2);

    // Step 4: gross pay.
    let allowances = input.allowances.round_dp(2);
    let bonus = input.bonus.round_dp(2);
    let gross_pay = calculate_gross_pay(basic_salary, overtime, allowances, bonus);
    debug!(%basic_salary, %overtime, %gross_pay, "earnings");

    // Step 5: pre-tax deductions and the taxable base.
    let medical_aid_contribution = input.medical_aid_contribution.round_dp(2);
    let pension_fund_contribution = input.pension_fund_contribution.round_dp(2);
    let retirement_annuity_contribution = input.retirement_annuity_contribution.round_dp(2);
    let total_pre_tax_deductions =
        medical_aid_contribution + pension_fund_contribution + retirement_annuity_contribution;
    let taxable_income = gross_pay - total_pre_tax_deductions;

    // Step 6: PAYE over the annualized taxable income.
    let annual_gross_income = annualize(gross_pay, pay_frequency);
    let annual_taxable_income = annualize(taxable_income, pay_frequency);
    let paye_tax = calculate_paye(
        annual_taxable_income,
        pay_frequency,
        input.employee_age,
        input.has_medical_aid,
        input.medical_aid_dependants,
    );
    debug!(%annual_taxable_income, %paye_tax, "paye");

    // Step 7: UIF on gross, never on taxable income.
    let uif_employee = calculate_uif(gross_pay, pay_frequency);

    // Step 8: post-tax deductions and the deduction total.
    let medical_aid_post_tax = input.medical_aid_post_tax.round_dp(2);
    let other_deductions = input.other_deductions.round_dp(2);
    let total_post_tax_deductions = medical_aid_post_tax + other_deductions;
    let total_deductions =
        total_pre_tax_deductions + paye_tax + uif_employee + total_post_tax_deductions;

    // Step 9: net pay.
    let net_pay = gross_pay - total_deductions;
    debug!(%total_deductions, %net_pay, "totals");

    // Step 10: employer-side contributions, informational only.
    let uif_employer = calculate_uif(gross_pay, pay_frequency);
    let sdl = calculate_sdl(gross_pay, company.sdl_contribution);
    let eti = if company.eligible_for_eti {
        calculate_eti(gross_pay, input.employee_age)
    } else {
        Decimal::ZERO
    };

    // Step 11: diagnostics; the hourly fields only apply to hourly staff.
    let (breakdown_hourly_rate, breakdown_regular_hours) = match employee.rate_type {
        RateType::Hourly => (Some(hourly_rate), Some(input.regular_hours)),
        RateType::Salary => (None, None),
    };

    PayrollCalculation {
        basic_salary,
        overtime,
        allowances,
        bonus,
        gross_pay,
        medical_aid_contribution,
        pension_fund_contribution,
        retirement_annuity_contribution,
        total_pre_tax_deductions,
        taxable_income,
        paye_tax,
        uif_employee,
        medical_aid_post_tax,
        other_deductions,
        total_post_tax_deductions,
        total_deductions,
        net_pay,
        employer_contributions: EmployerContributions {
            uif: uif_employer,
            sdl,
            eti,
        },
        breakdown: PayBreakdown {
            hourly_rate: breakdown_hourly_rate,
            regular_hours: breakdown_regular_hours,
            annual_gross_income: annual_gross_income.round_dp(2),
            annual_taxable_income: annual_taxable_income.round_dp(2),
            uif_employee,
            uif_employer,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PayFrequency, RateProfile};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn hourly_input(rate: &str, regular_hours: &str) -> PayrollInput {
        let mut input = PayrollInput::for_employee(Decimal::ZERO);
        input.employee = RateProfile {
            rate: dec(rate),
            rate_type: RateType::Hourly,
            pay_frequency: PayFrequency::Monthly,
        };
        input.regular_hours = dec(regular_hours);
        input
    }

    fn assert_invariants(payslip: &PayrollCalculation) {
        assert_eq!(
            payslip.gross_pay,
            payslip.basic_salary + payslip.overtime + payslip.allowances + payslip.bonus
        );
        assert_eq!(
            payslip.total_deductions,
            payslip.total_pre_tax_deductions
                + payslip.paye_tax
                + payslip.uif_employee
                + payslip.total_post_tax_deductions
        );
        assert_eq!(payslip.net_pay, payslip.gross_pay - payslip.total_deductions);
    }

    /// PR-001: salaried employee uses the configured period amount
    #[test]
    fn test_salaried_basic_salary_is_rate() {
        let payslip = calculate_payroll(&PayrollInput::for_employee(dec("25000")));
        assert_eq!(payslip.basic_salary, dec("25000"));
        assert_eq!(payslip.gross_pay, dec("25000"));
        assert_invariants(&payslip);
    }

    /// PR-002: hourly employee with overtime
    #[test]
    fn test_hourly_payroll_scenario() {
        let mut input = hourly_input("150", "160");
        input.overtime_hours = dec("8");
        let payslip = calculate_payroll(&input);

        assert_eq!(payslip.basic_salary, dec("24000"));
        assert_eq!(payslip.overtime, dec("1800"));
        assert_invariants(&payslip);
    }

    /// PR-003: pre-tax deductions shrink the PAYE base, not gross
    #[test]
    fn test_pre_tax_deductions_reduce_taxable_income() {
        let mut input = PayrollInput::for_employee(dec("30000"));
        input.pension_fund_contribution = dec("2250");
        input.medical_aid_contribution = dec("1800");
        let payslip = calculate_payroll(&input);

        assert_eq!(payslip.gross_pay, dec("30000"));
        assert_eq!(payslip.total_pre_tax_deductions, dec("4050"));
        assert_eq!(payslip.taxable_income, dec("25950"));
        assert_eq!(payslip.breakdown.annual_taxable_income, dec("311400"));
        assert_invariants(&payslip);
    }

    /// PR-004: UIF is charged on gross, not taxable income
    #[test]
    fn test_uif_is_gross_based() {
        let mut input = PayrollInput::for_employee(dec("10000"));
        input.pension_fund_contribution = dec("5000");
        let payslip = calculate_payroll(&input);

        // 1% of the 10,000 gross, not of the 5,000 taxable income.
        assert_eq!(payslip.uif_employee, dec("100"));
        assert_invariants(&payslip);
    }

    /// PR-005: employer UIF mirrors the employee's
    #[test]
    fn test_employer_uif_mirrors_employee() {
        let payslip = calculate_payroll(&PayrollInput::for_employee(dec("25000")));
        assert_eq!(payslip.employer_contributions.uif, payslip.uif_employee);
        assert_eq!(payslip.breakdown.uif_employer, payslip.uif_employee);
    }

    /// PR-006: SDL and ETI respect the company flags
    #[test]
    fn test_company_flags_gate_sdl_and_eti() {
        let mut input = PayrollInput::for_employee(dec("4000"));
        input.employee_age = Some(24);
        let payslip = calculate_payroll(&input);
        assert_eq!(payslip.employer_contributions.sdl, Decimal::ZERO);
        assert_eq!(payslip.employer_contributions.eti, Decimal::ZERO);

        input.company.sdl_contribution = true;
        input.company.eligible_for_eti = true;
        let payslip = calculate_payroll(&input);
        assert_eq!(payslip.employer_contributions.sdl, dec("40"));
        assert_eq!(payslip.employer_contributions.eti, dec("1000"));
    }

    /// PR-007: employer contributions never touch net pay
    #[test]
    fn test_employer_contributions_are_informational() {
        let mut with_flags = PayrollInput::for_employee(dec("4000"));
        with_flags.employee_age = Some(24);
        with_flags.company.sdl_contribution = true;
        with_flags.company.eligible_for_eti = true;

        let mut without_flags = with_flags.clone();
        without_flags.company.sdl_contribution = false;
        without_flags.company.eligible_for_eti = false;

        let a = calculate_payroll(&with_flags);
        let b = calculate_payroll(&without_flags);
        assert_eq!(a.net_pay, b.net_pay);
        assert_eq!(a.total_deductions, b.total_deductions);
    }

    /// PR-008: breakdown hourly fields only for hourly employees
    #[test]
    fn test_breakdown_hourly_fields() {
        let salaried = calculate_payroll(&PayrollInput::for_employee(dec("25000")));
        assert_eq!(salaried.breakdown.hourly_rate, None);
        assert_eq!(salaried.breakdown.regular_hours, None);

        let hourly = calculate_payroll(&hourly_input("150", "160"));
        assert_eq!(hourly.breakdown.hourly_rate, Some(dec("150")));
        assert_eq!(hourly.breakdown.regular_hours, Some(dec("160")));
    }

    /// PR-009: identical input yields identical output
    #[test]
    fn test_deterministic() {
        let mut input = PayrollInput::for_employee(dec("37500.55"));
        input.bonus = dec("1234.56");
        input.employee_age = Some(41);
        input.has_medical_aid = true;
        input.medical_aid_dependants = 2;

        let first = calculate_payroll(&input);
        let second = calculate_payroll(&input);
        assert_eq!(first, second);
    }

    /// PR-010: zero input produces an all-zero payslip
    #[test]
    fn test_zero_input() {
        let payslip = calculate_payroll(&PayrollInput::for_employee(Decimal::ZERO));
        assert_eq!(payslip.gross_pay, Decimal::ZERO);
        assert_eq!(payslip.paye_tax, Decimal::ZERO);
        assert_eq!(payslip.uif_employee, Decimal::ZERO);
        assert_eq!(payslip.net_pay, Decimal::ZERO);
        assert_invariants(&payslip);
    }

    /// PR-011: post-tax deductions reduce net but not taxable income
    #[test]
    fn test_post_tax_deductions() {
        let mut input = PayrollInput::for_employee(dec("20000"));
        input.medical_aid_post_tax = dec("950");
        input.other_deductions = dec("300");
        let payslip = calculate_payroll(&input);

        assert_eq!(payslip.taxable_income, dec("20000"));
        assert_eq!(payslip.total_post_tax_deductions, dec("1250"));
        assert_invariants(&payslip);
    }

    /// PR-012: sub-cent inputs are normalized to cents before totalling
    #[test]
    fn test_sub_cent_inputs_rounded() {
        let mut input = hourly_input("28.54", "7.5");
        input.allowances = dec("10.005");
        let payslip = calculate_payroll(&input);

        // 28.54 * 7.5 = 214.05; 10.005 rounds to 10.00 (banker's rounding).
        assert_eq!(payslip.basic_salary, dec("214.05"));
        assert_eq!(payslip.allowances, dec("10.00"));
        assert_invariants(&payslip);
    }
}
