//! Data models for the payroll engine.

mod company_policy;
mod payroll_calculation;
mod payroll_input;
mod rate_profile;

pub use company_policy::CompanyRatePolicy;
pub use payroll_calculation::{EmployerContributions, PayBreakdown, PayrollCalculation};
pub use payroll_input::{PayPeriod, PayrollInput};
pub use rate_profile::{PayFrequency, RateProfile, RateType};
