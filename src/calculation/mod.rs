//! Calculation logic for the payroll engine.
//!
//! This module contains all the calculation functions for producing a
//! payslip: rate normalization, overtime pay, gross pay, annualization,
//! PAYE with rebates and medical tax credits, UIF with frequency-scaled
//! caps, SDL, ETI and the orchestrator that ties them together.
//!
//! Every function here is pure: it reads only its arguments and the
//! constant tables in [`crate::tables`], performs no I/O and takes no clock
//! reads, so identical input always yields identical output.

mod annualization;
mod eti;
mod gross_pay;
mod hourly_rate;
mod overtime;
mod paye;
mod payroll;
mod sdl;
mod uif;

pub use annualization::{annualize, per_period};
pub use eti::calculate_eti;
pub use gross_pay::calculate_gross_pay;
pub use hourly_rate::calculate_hourly_rate;
pub use overtime::calculate_overtime_pay;
pub use paye::{
    annual_tax_before_rebates, calculate_paye, monthly_medical_credit, total_rebates,
};
pub use payroll::calculate_payroll;
pub use sdl::calculate_sdl;
pub use uif::calculate_uif;
