//! Payroll calculation result models.
//!
//! [`PayrollCalculation`] captures the complete, internally consistent
//! breakdown produced by a calculation: earnings, deductions, statutory
//! amounts, the employer-side contributions and the diagnostic breakdown.
//! Every field is derived; the struct carries no hidden state and is meant
//! to be serialized 1:1 into a persisted payslip row.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Employer-side statutory contributions.
///
/// These are informational for the payslip; none of them are deducted from
/// the employee's pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmployerContributions {
    /// Employer UIF contribution (mirrors the employee's 1%).
    pub uif: Decimal,
    /// Skills Development Levy, zero when the company is below the threshold.
    pub sdl: Decimal,
    /// Employment Tax Incentive claimable for this employee.
    pub eti: Decimal,
}

impl EmployerContributions {
    /// Total employer-side cost on top of gross pay. ETI is a credit against
    /// the employer's PAYE liability, so it reduces the total.
    pub fn total(&self) -> Decimal {
        self.uif + self.sdl - self.eti
    }
}

/// Derived diagnostic values for display and audit purposes.
///
/// The hourly fields are only populated for hourly employees; a salaried
/// payslip has no meaningful hours column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// The hourly rate the calculation used, for hourly employees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<Decimal>,
    /// Ordinary hours worked, for hourly employees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regular_hours: Option<Decimal>,
    /// Gross pay annualized by the employee's pay frequency.
    pub annual_gross_income: Decimal,
    /// Taxable income annualized by the employee's pay frequency.
    pub annual_taxable_income: Decimal,
    /// The employee's UIF contribution this period.
    pub uif_employee: Decimal,
    /// The employer's matching UIF contribution this period.
    pub uif_employer: Decimal,
}

/// The complete result of a payroll calculation.
///
/// Invariants that always hold:
/// - `gross_pay == basic_salary + overtime + allowances + bonus`
/// - `total_deductions == total_pre_tax_deductions + paye_tax + uif_employee
///   + total_post_tax_deductions`
/// - `net_pay == gross_pay - total_deductions`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayrollCalculation {
    /// Pay for ordinary time: the configured period amount for salaried
    /// employees, hourly rate times regular hours for hourly employees.
    pub basic_salary: Decimal,
    /// Overtime and doubletime pay.
    pub overtime: Decimal,
    /// Taxable allowances.
    pub allowances: Decimal,
    /// Bonus.
    pub bonus: Decimal,
    /// Sum of all earnings.
    pub gross_pay: Decimal,

    /// Pre-tax medical aid contribution.
    pub medical_aid_contribution: Decimal,
    /// Pre-tax pension fund contribution.
    pub pension_fund_contribution: Decimal,
    /// Pre-tax retirement annuity contribution.
    pub retirement_annuity_contribution: Decimal,
    /// Sum of the pre-tax deductions.
    pub total_pre_tax_deductions: Decimal,

    /// Gross pay less pre-tax deductions; the PAYE base.
    pub taxable_income: Decimal,
    /// PAYE withheld this period.
    pub paye_tax: Decimal,
    /// Employee UIF contribution this period.
    pub uif_employee: Decimal,

    /// Post-tax medical aid amount.
    pub medical_aid_post_tax: Decimal,
    /// Other post-tax deductions.
    pub other_deductions: Decimal,
    /// Sum of the post-tax deductions.
    pub total_post_tax_deductions: Decimal,

    /// Everything withheld from the employee this period.
    pub total_deductions: Decimal,
    /// What the employee takes home.
    pub net_pay: Decimal,

    /// Employer-side statutory contributions (informational).
    pub employer_contributions: EmployerContributions,
    /// Derived diagnostics for display and audit.
    pub breakdown: PayBreakdown,
}
