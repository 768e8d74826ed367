//! Client record data structures matching the persisted roster format

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::exposure::{self, ExposureBreakdown, InsuranceTier};

/// Self-reported count of past insurance claims
///
/// Display/risk-flag signal only; not an input to the exposure formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimsHistory {
    /// No prior claims
    #[serde(rename = "none")]
    None,
    /// 1-2 prior claims
    #[serde(rename = "1-2")]
    OneToTwo,
    /// 3-5 prior claims
    #[serde(rename = "3-5")]
    ThreeToFive,
    /// More than 5 prior claims
    #[serde(rename = "more")]
    MoreThanFive,
}

/// Risk grading used by dashboard client cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl ClaimsHistory {
    /// Get the string representation matching the stored format
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimsHistory::None => "none",
            ClaimsHistory::OneToTwo => "1-2",
            ClaimsHistory::ThreeToFive => "3-5",
            ClaimsHistory::MoreThanFive => "more",
        }
    }

    /// Parse from the stored string representation
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "none" => Some(ClaimsHistory::None),
            "1-2" => Some(ClaimsHistory::OneToTwo),
            "3-5" => Some(ClaimsHistory::ThreeToFive),
            "more" => Some(ClaimsHistory::MoreThanFive),
            _ => None,
        }
    }

    /// High-risk clients are counted separately on the dashboard
    pub fn is_high_risk(&self) -> bool {
        matches!(self, ClaimsHistory::ThreeToFive | ClaimsHistory::MoreThanFive)
    }

    pub fn risk_level(&self) -> RiskLevel {
        match self {
            ClaimsHistory::None => RiskLevel::Low,
            ClaimsHistory::OneToTwo => RiskLevel::Moderate,
            ClaimsHistory::ThreeToFive | ClaimsHistory::MoreThanFive => RiskLevel::High,
        }
    }
}

/// Risk-mitigating feature recorded for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SafetyFeature {
    #[serde(rename = "security-system")]
    SecuritySystem,
    #[serde(rename = "fire-alarm")]
    FireAlarm,
    #[serde(rename = "sprinklers")]
    Sprinklers,
    #[serde(rename = "storm-resistant")]
    StormResistant,
}

impl SafetyFeature {
    pub fn as_str(&self) -> &'static str {
        match self {
            SafetyFeature::SecuritySystem => "security-system",
            SafetyFeature::FireAlarm => "fire-alarm",
            SafetyFeature::Sprinklers => "sprinklers",
            SafetyFeature::StormResistant => "storm-resistant",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "security-system" => Some(SafetyFeature::SecuritySystem),
            "fire-alarm" => Some(SafetyFeature::FireAlarm),
            "sprinklers" => Some(SafetyFeature::Sprinklers),
            "storm-resistant" => Some(SafetyFeature::StormResistant),
            _ => None,
        }
    }
}

/// A single client record in the roster
///
/// `name` is the natural key: lookups and updates address records by exact
/// name match. Financial inputs are stored as the text the agent entered
/// and parsed at use time; `liability_exposure` and `insurance_tier` are
/// derived from them on every create/update and never edited directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    /// Creation-timestamp-derived identifier, set once and never recomputed
    pub id: String,

    /// Client name, unique within the store
    pub name: String,

    pub email: String,

    pub phone: String,

    pub address: String,

    /// Home value in dollars, as entered
    pub home_value: String,

    /// Vehicle value in dollars, as entered
    pub vehicle_value: String,

    /// Annual income in dollars, as entered
    pub income: String,

    /// Existing life insurance coverage in dollars, as entered
    pub life_insurance: String,

    /// Investment account balances in dollars, as entered
    pub investments: String,

    pub claims_history: ClaimsHistory,

    /// Order irrelevant; stored in the order supplied
    #[serde(default)]
    pub safety_features: Vec<SafetyFeature>,

    /// Derived: total liability exposure as of the last create/update
    pub liability_exposure: f64,

    /// Derived: coverage tier as of the last create/update
    pub insurance_tier: InsuranceTier,

    pub created_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ClientRecord {
    /// Parsed home value (0.0 when absent or unparsable)
    pub fn home_value_amount(&self) -> f64 {
        exposure::parse_amount(&self.home_value)
    }

    pub fn vehicle_value_amount(&self) -> f64 {
        exposure::parse_amount(&self.vehicle_value)
    }

    pub fn income_amount(&self) -> f64 {
        exposure::parse_amount(&self.income)
    }

    pub fn life_insurance_amount(&self) -> f64 {
        exposure::parse_amount(&self.life_insurance)
    }

    pub fn investments_amount(&self) -> f64 {
        exposure::parse_amount(&self.investments)
    }

    /// Recompute the full five-component exposure breakdown
    ///
    /// `breakdown.total_exposure` always equals `liability_exposure` because
    /// the store refreshes the derived fields from this same computation.
    pub fn exposure_breakdown(&self) -> ExposureBreakdown {
        exposure::compute_exposure_from_text(
            &self.home_value,
            &self.vehicle_value,
            &self.income,
            &self.life_insurance,
            &self.investments,
        )
    }

    /// Sum of the five raw asset figures in whole dollars (report line)
    pub fn total_assets(&self) -> i64 {
        whole_dollars(&self.home_value)
            + whole_dollars(&self.vehicle_value)
            + whole_dollars(&self.income)
            + whole_dollars(&self.life_insurance)
            + whole_dollars(&self.investments)
    }
}

/// Truncating whole-dollar parse used for report and dashboard totals
pub(crate) fn whole_dollars(text: &str) -> i64 {
    exposure::parse_amount(text).trunc() as i64
}

/// Raw field values supplied to create/update
///
/// Every field is optional: `create` requires most of them to be present,
/// while `update` merges only the supplied fields over the existing record.
#[derive(Debug, Clone, Default)]
pub struct ClientFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub home_value: Option<String>,
    pub vehicle_value: Option<String>,
    pub income: Option<String>,
    pub life_insurance: Option<String>,
    pub investments: Option<String>,
    pub claims_history: Option<ClaimsHistory>,
    pub safety_features: Option<Vec<SafetyFeature>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_history_round_trip() {
        for claims in [
            ClaimsHistory::None,
            ClaimsHistory::OneToTwo,
            ClaimsHistory::ThreeToFive,
            ClaimsHistory::MoreThanFive,
        ] {
            assert_eq!(ClaimsHistory::from_value(claims.as_str()), Some(claims));
        }
        assert_eq!(ClaimsHistory::from_value("6+"), None);
    }

    #[test]
    fn test_claims_risk_flags() {
        assert!(!ClaimsHistory::None.is_high_risk());
        assert!(!ClaimsHistory::OneToTwo.is_high_risk());
        assert!(ClaimsHistory::ThreeToFive.is_high_risk());
        assert!(ClaimsHistory::MoreThanFive.is_high_risk());

        assert_eq!(ClaimsHistory::None.risk_level(), RiskLevel::Low);
        assert_eq!(ClaimsHistory::OneToTwo.risk_level(), RiskLevel::Moderate);
        assert_eq!(ClaimsHistory::MoreThanFive.risk_level(), RiskLevel::High);
    }

    #[test]
    fn test_safety_feature_round_trip() {
        for feature in [
            SafetyFeature::SecuritySystem,
            SafetyFeature::FireAlarm,
            SafetyFeature::Sprinklers,
            SafetyFeature::StormResistant,
        ] {
            assert_eq!(SafetyFeature::from_value(feature.as_str()), Some(feature));
        }
        assert_eq!(SafetyFeature::from_value("moat"), None);
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = ClientRecord {
            id: "1722950000000".to_string(),
            name: "Dana Reyes".to_string(),
            email: "dana@example.com".to_string(),
            phone: "555-0100".to_string(),
            address: "12 Elm St".to_string(),
            home_value: "250000".to_string(),
            vehicle_value: "18000".to_string(),
            income: "72000".to_string(),
            life_insurance: "100000".to_string(),
            investments: "40000".to_string(),
            claims_history: ClaimsHistory::OneToTwo,
            safety_features: vec![SafetyFeature::FireAlarm],
            liability_exposure: 1_628_000.0,
            insurance_tier: InsuranceTier::Tier4,
            created_at: Utc::now(),
            updated_at: None,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"homeValue\":\"250000\""));
        assert!(json.contains("\"claimsHistory\":\"1-2\""));
        assert!(json.contains("\"safetyFeatures\":[\"fire-alarm\"]"));
        assert!(json.contains("\"insuranceTier\":\"Tier 4: $500,000+\""));
        // Absent updatedAt is omitted, not null
        assert!(!json.contains("updatedAt"));

        let back: ClientRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, record.name);
        assert_eq!(back.claims_history, record.claims_history);
        assert_eq!(back.insurance_tier, record.insurance_tier);
    }

    #[test]
    fn test_whole_dollar_totals() {
        let record = ClientRecord {
            id: "1".to_string(),
            name: "A".to_string(),
            email: "a@b.c".to_string(),
            phone: "1".to_string(),
            address: "x".to_string(),
            home_value: "250000.75".to_string(),
            vehicle_value: "18000".to_string(),
            income: "not a number".to_string(),
            life_insurance: "".to_string(),
            investments: "40000".to_string(),
            claims_history: ClaimsHistory::None,
            safety_features: vec![],
            liability_exposure: 0.0,
            insurance_tier: InsuranceTier::Tier1,
            created_at: Utc::now(),
            updated_at: None,
        };

        // Fractions truncate; unparsable fields count as zero
        assert_eq!(record.total_assets(), 250_000 + 18_000 + 40_000);
    }

    #[test]
    fn test_breakdown_matches_stored_inputs() {
        let record = ClientRecord {
            id: "1".to_string(),
            name: "B".to_string(),
            email: "b@b.c".to_string(),
            phone: "1".to_string(),
            address: "y".to_string(),
            home_value: "300000".to_string(),
            vehicle_value: "20000".to_string(),
            income: "80000".to_string(),
            life_insurance: "200000".to_string(),
            investments: "100000".to_string(),
            claims_history: ClaimsHistory::None,
            safety_features: vec![],
            liability_exposure: 1_770_000.0,
            insurance_tier: InsuranceTier::Tier4,
            created_at: Utc::now(),
            updated_at: None,
        };

        let breakdown = record.exposure_breakdown();
        assert_eq!(breakdown.total_exposure, record.liability_exposure);
        assert_eq!(breakdown.tier(), record.insurance_tier);
    }
}
