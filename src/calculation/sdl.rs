//! Skills Development Levy calculation.

use rust_decimal::Decimal;

use crate::tables::SDL_RATE;

/// Calculates the employer's Skills Development Levy: 1% of gross pay when
/// the company contributes, zero otherwise.
///
/// The `sdl_contribution` flag is company configuration that already encodes
/// the >R500k annual payroll eligibility test; the engine does not compute
/// payroll totals itself. SDL is employer-side and informational, never
/// deducted from the employee.
pub fn calculate_sdl(gross_pay: Decimal, sdl_contribution: bool) -> Decimal {
    if sdl_contribution {
        (gross_pay * SDL_RATE).round_dp(2)
    } else {
        Decimal::ZERO
    }
}
