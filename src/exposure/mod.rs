//! Liability-exposure calculator and coverage tier classification

mod calculator;
mod tier;

pub use calculator::{compute_exposure, compute_exposure_from_text, parse_amount, ExposureBreakdown};
pub use tier::InsuranceTier;

// ============================================================================
// Exposure Formula Factors
// ============================================================================
// The exposure estimate combines each asset class at a fixed weight. Home
// and vehicle values count in full; income is projected forward; half of
// investment balances are considered reachable in a judgment.

/// Years of annual income protected against loss of future earnings (10x)
pub const INCOME_MULTIPLIER_FACTOR: f64 = 10.0;

/// Share of investment account balances needing liability protection (50%)
pub const INVESTMENT_PROTECTION_FACTOR: f64 = 0.5;
