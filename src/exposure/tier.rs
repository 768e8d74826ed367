//! Coverage tier classification over liability exposure

use serde::{Deserialize, Serialize};

/// Coverage tier band derived from total liability exposure
///
/// Serialized as the full label string (e.g. "Tier 1: Up to $100,000"),
/// matching the persisted client-record format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InsuranceTier {
    /// (-Inf, 100000]
    #[serde(rename = "Tier 1: Up to $100,000")]
    Tier1,
    /// (100000, 300000]
    #[serde(rename = "Tier 2: $100,000 - $300,000")]
    Tier2,
    /// (300000, 500000]
    #[serde(rename = "Tier 3: $300,000 - $500,000")]
    Tier3,
    /// (500000, Inf)
    #[serde(rename = "Tier 4: $500,000+")]
    Tier4,
}

impl InsuranceTier {
    /// Determine tier from total liability exposure
    ///
    /// Bands have inclusive upper bounds: an exposure of exactly 100,000
    /// stays in Tier 1, exactly 300,000 in Tier 2, exactly 500,000 in Tier 3.
    pub fn from_exposure(total_exposure: f64) -> Self {
        if total_exposure <= 100_000.0 {
            InsuranceTier::Tier1
        } else if total_exposure <= 300_000.0 {
            InsuranceTier::Tier2
        } else if total_exposure <= 500_000.0 {
            InsuranceTier::Tier3
        } else {
            InsuranceTier::Tier4
        }
    }

    /// Full tier label shown everywhere the tier is displayed
    pub fn label(&self) -> &'static str {
        match self {
            InsuranceTier::Tier1 => "Tier 1: Up to $100,000",
            InsuranceTier::Tier2 => "Tier 2: $100,000 - $300,000",
            InsuranceTier::Tier3 => "Tier 3: $300,000 - $500,000",
            InsuranceTier::Tier4 => "Tier 4: $500,000+",
        }
    }

    /// Parse a tier from its label string
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Tier 1: Up to $100,000" => Some(InsuranceTier::Tier1),
            "Tier 2: $100,000 - $300,000" => Some(InsuranceTier::Tier2),
            "Tier 3: $300,000 - $500,000" => Some(InsuranceTier::Tier3),
            "Tier 4: $500,000+" => Some(InsuranceTier::Tier4),
            _ => None,
        }
    }

    /// Headline coverage recommendation for the summary report
    pub fn recommendation(&self) -> &'static str {
        match self {
            InsuranceTier::Tier1 => "Basic Coverage Recommended",
            InsuranceTier::Tier2 => "Standard Coverage Recommended",
            InsuranceTier::Tier3 => "Enhanced Coverage Recommended",
            InsuranceTier::Tier4 => "Premium Coverage Recommended",
        }
    }

    /// Recommendation rationale printed verbatim in the summary report
    pub fn rationale(&self) -> &'static str {
        match self {
            InsuranceTier::Tier1 => {
                "Minimum coverage for limited assets. Consider upgrading for better protection."
            }
            InsuranceTier::Tier2 => {
                "Adequate coverage for moderate asset levels. Good starting point for most families."
            }
            InsuranceTier::Tier3 => {
                "Strong protection for your asset level. Recommended for established families."
            }
            InsuranceTier::Tier4 => {
                "Maximum protection for high asset exposure. Peace of mind for high net worth individuals."
            }
        }
    }

    /// Short guidance shown alongside a standalone calculator result
    pub fn advisory(&self) -> &'static str {
        match self {
            InsuranceTier::Tier1 => {
                "Basic coverage for minimal assets. Consider upgrading for better protection."
            }
            InsuranceTier::Tier2 => {
                "Standard protection for moderate asset levels. Adequate but consider enhanced coverage."
            }
            InsuranceTier::Tier3 => {
                "Enhanced protection recommended for your asset level. Strong coverage option."
            }
            InsuranceTier::Tier4 => {
                "Premium protection for high asset exposure. Maximum coverage recommended."
            }
        }
    }
}
