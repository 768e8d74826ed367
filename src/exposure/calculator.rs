//! Liability-exposure calculation from client financial inputs

use serde::{Deserialize, Serialize};

use super::{InsuranceTier, INCOME_MULTIPLIER_FACTOR, INVESTMENT_PROTECTION_FACTOR};

/// Parse a financial input stored as text
///
/// Absent, unparsable, or non-finite values degrade to 0.0 rather than
/// failing. Negative values pass through unchanged.
pub fn parse_amount(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Itemized liability-exposure result
///
/// Every component is carried verbatim because the detail view and the
/// summary report display each line alongside the total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExposureBreakdown {
    /// Full home value at risk in a lawsuit
    pub home_value: f64,

    /// Vehicle value plus potential damages
    pub vehicle_value: f64,

    /// 10x annual income for future earnings
    pub income_multiplier: f64,

    /// Additional life insurance needed above existing coverage
    pub life_insurance_gap: f64,

    /// Half of investment accounts at risk
    pub investment_protection: f64,

    /// Minimum insurance coverage needed
    pub total_exposure: f64,
}

impl ExposureBreakdown {
    /// Coverage tier for this exposure level
    pub fn tier(&self) -> InsuranceTier {
        InsuranceTier::from_exposure(self.total_exposure)
    }
}

/// Compute liability exposure from the five financial inputs
///
/// Pure and infallible: callers degrade missing input to 0.0 (see
/// [`parse_amount`]) before calling. Negative inputs are not clamped and
/// flow through the arithmetic; only the life-insurance gap is floored
/// at zero.
pub fn compute_exposure(
    home_value: f64,
    vehicle_value: f64,
    income: f64,
    life_insurance: f64,
    investments: f64,
) -> ExposureBreakdown {
    let income_multiplier = income * INCOME_MULTIPLIER_FACTOR;
    let life_insurance_gap = (income_multiplier - life_insurance).max(0.0);
    let investment_protection = investments * INVESTMENT_PROTECTION_FACTOR;

    let total_exposure =
        home_value + vehicle_value + income_multiplier + life_insurance_gap + investment_protection;

    ExposureBreakdown {
        home_value,
        vehicle_value,
        income_multiplier,
        life_insurance_gap,
        investment_protection,
        total_exposure,
    }
}

/// Compute liability exposure from raw text inputs
pub fn compute_exposure_from_text(
    home_value: &str,
    vehicle_value: &str,
    income: &str,
    life_insurance: &str,
    investments: &str,
) -> ExposureBreakdown {
    compute_exposure(
        parse_amount(home_value),
        parse_amount(vehicle_value),
        parse_amount(income),
        parse_amount(life_insurance),
        parse_amount(investments),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("250000"), 250_000.0);
        assert_eq!(parse_amount("  1234.56 "), 1234.56);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("42abc"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
        // Negative values are preserved, not clamped
        assert_eq!(parse_amount("-5000"), -5000.0);
    }

    #[test]
    fn test_high_exposure_client() {
        let result = compute_exposure(300_000.0, 20_000.0, 80_000.0, 200_000.0, 100_000.0);

        assert_relative_eq!(result.income_multiplier, 800_000.0);
        assert_relative_eq!(result.life_insurance_gap, 600_000.0);
        assert_relative_eq!(result.investment_protection, 50_000.0);
        assert_relative_eq!(result.total_exposure, 1_770_000.0);
        assert_eq!(result.tier(), InsuranceTier::Tier4);
    }

    #[test]
    fn test_moderate_exposure_client() {
        let result = compute_exposure(50_000.0, 10_000.0, 5_000.0, 50_000.0, 0.0);

        assert_relative_eq!(result.income_multiplier, 50_000.0);
        assert_relative_eq!(result.life_insurance_gap, 0.0);
        assert_relative_eq!(result.investment_protection, 0.0);
        assert_relative_eq!(result.total_exposure, 110_000.0);
        assert_eq!(result.tier(), InsuranceTier::Tier2);
    }

    #[test]
    fn test_low_exposure_client() {
        let result = compute_exposure(20_000.0, 5_000.0, 5_000.0, 50_000.0, 0.0);

        assert_relative_eq!(result.income_multiplier, 50_000.0);
        assert_relative_eq!(result.life_insurance_gap, 0.0);
        assert_relative_eq!(result.investment_protection, 0.0);
        assert_relative_eq!(result.total_exposure, 75_000.0);
        assert_eq!(result.tier(), InsuranceTier::Tier1);
    }

    #[test]
    fn test_gap_never_negative() {
        // Existing life insurance above 10x income zeroes the gap
        let result = compute_exposure(0.0, 0.0, 30_000.0, 1_000_000.0, 0.0);
        assert_relative_eq!(result.life_insurance_gap, 0.0);
        assert_relative_eq!(result.total_exposure, 300_000.0);

        let exact = compute_exposure(0.0, 0.0, 50_000.0, 500_000.0, 0.0);
        assert_relative_eq!(exact.life_insurance_gap, 0.0);
    }

    #[test]
    fn test_deterministic() {
        let a = compute_exposure(123_456.78, 9_876.54, 65_432.1, 111_111.0, 22_222.0);
        let b = compute_exposure(123_456.78, 9_876.54, 65_432.1, 111_111.0, 22_222.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_fractional_investment_protection() {
        // Odd investment amounts produce fractional totals
        let result = compute_exposure(0.0, 0.0, 0.0, 0.0, 1001.0);
        assert_relative_eq!(result.investment_protection, 500.5);
        assert_relative_eq!(result.total_exposure, 500.5);
    }

    #[test]
    fn test_from_text_degrades_to_zero() {
        let result = compute_exposure_from_text("300000", "", "not a number", "0", "100000");
        assert_relative_eq!(result.home_value, 300_000.0);
        assert_relative_eq!(result.vehicle_value, 0.0);
        assert_relative_eq!(result.income_multiplier, 0.0);
        assert_relative_eq!(result.investment_protection, 50_000.0);
        assert_relative_eq!(result.total_exposure, 350_000.0);
    }
}
