//! SARS statutory constant tables.
//!
//! All rates, brackets, rebates and caps used by the calculation functions
//! live here as process-wide immutable constants. Figures are annual ZAR
//! amounts from the SARS 2025/2026 tax tables unless noted otherwise.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A single PAYE bracket.
///
/// `threshold` is the cumulative tax owed at the bracket's `min`, so the tax
/// for an income inside the bracket is `threshold + (income - min) * rate`
/// without needing to walk the lower brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxBracket {
    /// Lower bound of the bracket (exclusive for bracket selection).
    pub min: Decimal,
    /// Upper bound of the bracket, `None` for the top bracket.
    pub max: Option<Decimal>,
    /// Marginal tax rate applied within the bracket.
    pub rate: Decimal,
    /// Cumulative tax owed at `min`.
    pub threshold: Decimal,
}

/// The seven PAYE brackets, ascending by income.
pub const TAX_BRACKETS: [TaxBracket; 7] = [
    TaxBracket {
        min: dec!(0),
        max: Some(dec!(237_100)),
        rate: dec!(0.18),
        threshold: dec!(0),
    },
    TaxBracket {
        min: dec!(237_101),
        max: Some(dec!(370_500)),
        rate: dec!(0.26),
        threshold: dec!(42_678),
    },
    TaxBracket {
        min: dec!(370_501),
        max: Some(dec!(512_800)),
        rate: dec!(0.31),
        threshold: dec!(77_362),
    },
    TaxBracket {
        min: dec!(512_801),
        max: Some(dec!(673_000)),
        rate: dec!(0.36),
        threshold: dec!(121_475),
    },
    TaxBracket {
        min: dec!(673_001),
        max: Some(dec!(857_900)),
        rate: dec!(0.39),
        threshold: dec!(179_147),
    },
    TaxBracket {
        min: dec!(857_901),
        max: Some(dec!(1_817_000)),
        rate: dec!(0.41),
        threshold: dec!(251_258),
    },
    TaxBracket {
        min: dec!(1_817_001),
        max: None,
        rate: dec!(0.45),
        threshold: dec!(644_489),
    },
];

/// Primary rebate, applied to every taxpayer.
pub const PRIMARY_REBATE: Decimal = dec!(17_235);

/// Secondary rebate, added from age 65.
pub const SECONDARY_REBATE: Decimal = dec!(9_444);

/// Tertiary rebate, added from age 75 (on top of the secondary rebate).
pub const TERTIARY_REBATE: Decimal = dec!(3_145);

/// Age from which the secondary rebate applies.
pub const SECONDARY_REBATE_AGE: u32 = 65;

/// Age from which the tertiary rebate applies.
pub const TERTIARY_REBATE_AGE: u32 = 75;

/// Monthly medical scheme fees tax credit for the main member.
pub const MEDICAL_CREDIT_MAIN_MEMBER: Decimal = dec!(364);

/// Monthly credit for the first dependant.
pub const MEDICAL_CREDIT_FIRST_DEPENDANT: Decimal = dec!(364);

/// Monthly credit for each dependant beyond the first.
pub const MEDICAL_CREDIT_ADDITIONAL_DEPENDANT: Decimal = dec!(246);

/// UIF contribution rate (1% employee, matched 1% by the employer).
pub const UIF_RATE: Decimal = dec!(0.01);

/// Monthly cap on the UIF contribution.
pub const UIF_MONTHLY_CAP: Decimal = dec!(177.12);

/// Divisor scaling the monthly UIF cap to a weekly cap (weeks per month).
pub const UIF_WEEKLY_CAP_DIVISOR: Decimal = dec!(4.33);

/// Divisor scaling the monthly UIF cap to a bi-weekly cap.
pub const UIF_BIWEEKLY_CAP_DIVISOR: Decimal = dec!(2.17);

/// Skills Development Levy rate (employer-only).
pub const SDL_RATE: Decimal = dec!(0.01);

/// Youngest qualifying age for the Employment Tax Incentive.
pub const ETI_MIN_AGE: u32 = 18;

/// Oldest qualifying age for the Employment Tax Incentive.
pub const ETI_MAX_AGE: u32 = 29;

/// Monthly remuneration below which the incentive is 50% of remuneration.
pub const ETI_FULL_BAND_CEILING: Decimal = dec!(2_000);

/// Monthly remuneration from which the incentive tapers towards zero.
pub const ETI_TAPER_FLOOR: Decimal = dec!(4_500);

/// Monthly remuneration at which the incentive reaches zero.
pub const ETI_SALARY_CEILING: Decimal = dec!(6_500);

/// Maximum monthly incentive per qualifying employee.
pub const ETI_MONTHLY_CAP: Decimal = dec!(1_000);

/// Rate applied in the lower band and to the taper (50%).
pub const ETI_HALF_RATE: Decimal = dec!(0.5);

/// Hours in the standard work year: 8 hours x 5 days x 52 weeks.
pub const STANDARD_WORK_YEAR_HOURS: Decimal = dec!(2_080);
