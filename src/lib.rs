//! Payroll Calculation Engine for South African statutory deductions.
//!
//! This crate turns an employee's contracted rate and a pay period's inputs
//! (hours, allowances, bonuses, deductions) into a fully itemised payslip,
//! applying the SARS PAYE progressive tax brackets, age-based rebates,
//! medical aid tax credits, UIF contribution caps, SDL and ETI.

#![warn(missing_docs)]

pub mod calculation;
pub mod error;
pub mod format;
pub mod models;
pub mod tables;
