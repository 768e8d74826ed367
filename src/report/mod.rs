//! Dashboard aggregates, printable summary reports, and roster export

use std::fmt::Write as _;
use std::io;

use chrono::NaiveDate;

use crate::client::ClientRecord;
use crate::exposure::{ExposureBreakdown, InsuranceTier};

mod format;

pub use format::{format_usd, format_whole};

/// Aggregate figures shown at the top of the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    /// Number of clients in the roster
    pub total_clients: usize,

    /// Sum of home values across all clients, in whole dollars
    pub total_home_value: i64,

    /// Clients with a high-risk claims history (3-5 or more claims)
    pub high_risk_clients: usize,

    /// Mean liability exposure across all clients (0 when empty)
    pub average_exposure: f64,
}

impl DashboardStats {
    /// Compute dashboard aggregates over the full roster
    pub fn compute(records: &[ClientRecord]) -> Self {
        let total_home_value = records.iter().map(|r| r.home_value_amount().trunc() as i64).sum();

        let high_risk_clients =
            records.iter().filter(|r| r.claims_history.is_high_risk()).count();

        let average_exposure = if records.is_empty() {
            0.0
        } else {
            records.iter().map(|r| r.liability_exposure).sum::<f64>() / records.len() as f64
        };

        Self {
            total_clients: records.len(),
            total_home_value,
            high_risk_clients,
            average_exposure,
        }
    }

    /// Render the stat block as display text
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Total Clients:      {}", self.total_clients);
        let _ = writeln!(out, "Total Home Value:   ${}", format_whole(self.total_home_value));
        let _ = writeln!(out, "High Risk Clients:  {}", self.high_risk_clients);
        let _ = writeln!(
            out,
            "Average Coverage:   ${}",
            format_whole(self.average_exposure.round() as i64)
        );
        out
    }
}

/// Per-component captions printed beside the exposure breakdown
const EXPOSURE_CAPTIONS: [&str; 5] = [
    "Full home value at risk in lawsuit",
    "Vehicle value plus potential damages",
    "10 times annual income for future earnings",
    "Additional life insurance needed",
    "Half of investment accounts at risk",
];

/// Printable per-client summary report
///
/// Built from a single record; the exposure breakdown is recomputed from
/// the stored inputs so every component line can be shown, and the tier
/// narratives are reused verbatim.
#[derive(Debug, Clone)]
pub struct ClientSummary {
    pub record: ClientRecord,
    pub breakdown: ExposureBreakdown,
    pub total_assets: i64,
    pub next_steps: Vec<String>,
    pub report_date: NaiveDate,
}

impl ClientSummary {
    /// Assemble the summary data for one client
    pub fn build(record: &ClientRecord, report_date: NaiveDate) -> Self {
        let breakdown = record.exposure_breakdown();
        let next_steps = next_steps_for(record.insurance_tier);

        Self {
            record: record.clone(),
            breakdown,
            total_assets: record.total_assets(),
            next_steps,
            report_date,
        }
    }

    /// Render the full printable report
    pub fn render(&self) -> String {
        let r = &self.record;
        let b = &self.breakdown;
        let mut out = String::new();

        let _ = writeln!(out, "{}", "=".repeat(64));
        let _ = writeln!(out, " LUMIA Client Summary Report");
        let _ = writeln!(out, "{}", "=".repeat(64));
        let _ = writeln!(out);

        let _ = writeln!(out, "Client Information");
        let _ = writeln!(out, "------------------");
        let _ = writeln!(out, "  Client Name:      {}", r.name);
        let _ = writeln!(out, "  Email:            {}", r.email);
        let _ = writeln!(out, "  Phone:            {}", r.phone);
        let _ = writeln!(out, "  Address:          {}", r.address);
        let _ = writeln!(out, "  Claims History:   {}", r.claims_history.as_str());
        let _ = writeln!(out, "  Assessment Date:  {}", r.created_at.date_naive());
        let _ = writeln!(out);

        let _ = writeln!(out, "Asset Summary");
        let _ = writeln!(out, "-------------");
        let assets = [
            ("Home Value:", r.home_value_amount()),
            ("Vehicle Value:", r.vehicle_value_amount()),
            ("Annual Income:", r.income_amount()),
            ("Life Insurance:", r.life_insurance_amount()),
            ("Investment Accounts:", r.investments_amount()),
        ];
        for (label, amount) in assets {
            let _ = writeln!(out, "  {:<22}{:>16}", label, format!("${}", format_whole(amount.trunc() as i64)));
        }
        let _ = writeln!(
            out,
            "  {:<22}{:>16}",
            "Total Assets:",
            format!("${}", format_whole(self.total_assets))
        );
        let _ = writeln!(out);

        let _ = writeln!(out, "Liability Exposure");
        let _ = writeln!(out, "------------------");
        let components = [
            ("Home Protection:", b.home_value),
            ("Vehicle Protection:", b.vehicle_value),
            ("Income Protection (10x):", b.income_multiplier),
            ("Life Insurance Gap:", b.life_insurance_gap),
            ("Investment Protection (50%):", b.investment_protection),
        ];
        for ((label, amount), caption) in components.iter().zip(EXPOSURE_CAPTIONS) {
            let _ = writeln!(
                out,
                "  {:<29}{:>16}   {}",
                label,
                format!("${}", format_usd(*amount)),
                caption
            );
        }
        let _ = writeln!(
            out,
            "  {:<29}{:>16}   {}",
            "Total Liability Exposure:",
            format!("${}", format_usd(b.total_exposure)),
            "Minimum insurance coverage needed"
        );
        let _ = writeln!(out);

        let tier = r.insurance_tier;
        let _ = writeln!(out, "Coverage Recommendation");
        let _ = writeln!(out, "-----------------------");
        let _ = writeln!(out, "  {} - {}", tier.label(), tier.recommendation());
        let _ = writeln!(out, "  {}", tier.rationale());
        let _ = writeln!(out, "  Liability Exposure: ${}", format_usd(r.liability_exposure));
        let _ = writeln!(out, "  Risk Factors: {} claims history", r.claims_history.as_str());
        let _ = writeln!(out);

        let _ = writeln!(out, "Recommended Next Steps");
        let _ = writeln!(out, "----------------------");
        for (i, step) in self.next_steps.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, step);
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "Report Date: {}", self.report_date);
        out
    }
}

/// Follow-up checklist printed at the end of every summary report
fn next_steps_for(tier: InsuranceTier) -> Vec<String> {
    vec![
        format!(
            "Schedule follow-up appointment to discuss {} coverage options",
            tier.label()
        ),
        "Obtain quotes from multiple insurance carriers for best rates".to_string(),
        "Review current policies for any gaps in coverage".to_string(),
        "Consider bundling auto and home insurance for discounts".to_string(),
        "Set up automatic premium payments to avoid lapses".to_string(),
        "Schedule annual policy review to adjust coverage as needed".to_string(),
        "Ensure all family members are properly covered".to_string(),
        "Review umbrella policy options for additional protection".to_string(),
    ]
}

/// Write the full roster as CSV, one row per client, derived fields included
pub fn write_roster_csv<W: io::Write>(records: &[ClientRecord], writer: W) -> csv::Result<()> {
    let mut w = csv::Writer::from_writer(writer);

    w.write_record([
        "Name",
        "Email",
        "Phone",
        "Address",
        "HomeValue",
        "VehicleValue",
        "Income",
        "LifeInsurance",
        "Investments",
        "ClaimsHistory",
        "SafetyFeatures",
        "LiabilityExposure",
        "InsuranceTier",
        "CreatedAt",
        "UpdatedAt",
    ])?;

    for r in records {
        let features =
            r.safety_features.iter().map(|f| f.as_str()).collect::<Vec<_>>().join(";");
        let exposure = format!("{:.2}", r.liability_exposure);
        let created = r.created_at.to_rfc3339();
        let updated = r.updated_at.map(|t| t.to_rfc3339()).unwrap_or_default();

        w.write_record([
            r.name.as_str(),
            r.email.as_str(),
            r.phone.as_str(),
            r.address.as_str(),
            r.home_value.as_str(),
            r.vehicle_value.as_str(),
            r.income.as_str(),
            r.life_insurance.as_str(),
            r.investments.as_str(),
            r.claims_history.as_str(),
            features.as_str(),
            exposure.as_str(),
            r.insurance_tier.label(),
            created.as_str(),
            updated.as_str(),
        ])?;
    }

    w.flush()?;
    Ok(())
}
