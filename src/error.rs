//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculation functions themselves are pure arithmetic and never fail;
//! these errors are produced by the input validation boundary that callers
//! run before handing data to the engine.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
/// use rust_decimal::Decimal;
///
/// let error = EngineError::NegativeAmount {
///     field: "bonus",
///     value: Decimal::new(-100, 0),
/// };
/// assert_eq!(error.to_string(), "Field 'bonus' must not be negative, got -100");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A monetary input field carried a negative amount.
    #[error("Field '{field}' must not be negative, got {value}")]
    NegativeAmount {
        /// The name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: Decimal,
    },

    /// A worked-hours input field carried a negative figure.
    #[error("Field '{field}' must not hold negative hours, got {value}")]
    NegativeHours {
        /// The name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: Decimal,
    },

    /// A company rate multiplier was negative.
    #[error("Rate multiplier '{field}' must not be negative, got {value}")]
    NegativeMultiplier {
        /// The name of the offending multiplier.
        field: &'static str,
        /// The rejected value.
        value: Decimal,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
