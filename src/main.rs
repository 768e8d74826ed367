//! LUMIA CLI
//!
//! Command-line interface for managing client records, computing
//! liability exposure, and producing dashboard and summary output

use std::fs::File;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use chrono::Local;

use lumia::{
    compute_exposure, ClaimsHistory, ClientFields, ClientStore, ClientSummary, DashboardStats,
    FileStore, SafetyFeature,
};
use lumia::report::{format_usd, write_roster_csv};

#[derive(Parser)]
#[command(name = "lumia", version, about = "Client liability-exposure assessment and coverage tiering")]
struct Cli {
    /// Directory holding the saved client roster
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all clients in the roster
    List,

    /// Show dashboard aggregates across the roster
    Dashboard,

    /// Create a new client record
    NewClient(FieldArgs),

    /// Update an existing client record by name
    UpdateClient {
        /// Current name of the client to update
        client: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Print the full summary report for one client
    Summary {
        /// Name of the client
        name: String,
    },

    /// Compute liability exposure from raw amounts without saving anything
    Calc {
        home_value: f64,
        vehicle_value: f64,
        income: f64,
        life_insurance: f64,
        investments: f64,
    },

    /// Export the roster to a CSV file
    ExportCsv {
        /// Output file path
        path: PathBuf,
    },
}

/// Client field values; any omitted flag is left unset
#[derive(Args)]
struct FieldArgs {
    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    email: Option<String>,

    #[arg(long)]
    phone: Option<String>,

    #[arg(long)]
    address: Option<String>,

    /// Home value in dollars
    #[arg(long)]
    home_value: Option<String>,

    /// Vehicle value in dollars
    #[arg(long)]
    vehicle_value: Option<String>,

    /// Annual income in dollars
    #[arg(long)]
    income: Option<String>,

    /// Existing life insurance coverage in dollars
    #[arg(long)]
    life_insurance: Option<String>,

    /// Investment account balances in dollars
    #[arg(long)]
    investments: Option<String>,

    /// Claims history: none, 1-2, 3-5, more
    #[arg(long)]
    claims: Option<String>,

    /// Safety feature tag, repeatable:
    /// security-system, fire-alarm, sprinklers, storm-resistant
    #[arg(long = "safety")]
    safety: Vec<String>,
}

impl FieldArgs {
    fn into_fields(self) -> Result<ClientFields> {
        let claims_history = self
            .claims
            .map(|v| {
                ClaimsHistory::from_value(&v).ok_or_else(|| {
                    anyhow!("unknown claims history '{}' (expected none, 1-2, 3-5, more)", v)
                })
            })
            .transpose()?;

        let safety_features = if self.safety.is_empty() {
            None
        } else {
            Some(
                self.safety
                    .iter()
                    .map(|v| {
                        SafetyFeature::from_value(v)
                            .ok_or_else(|| anyhow!("unknown safety feature '{}'", v))
                    })
                    .collect::<Result<Vec<_>>>()?,
            )
        };

        Ok(ClientFields {
            name: self.name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            home_value: self.home_value,
            vehicle_value: self.vehicle_value,
            income: self.income,
            life_insurance: self.life_insurance,
            investments: self.investments,
            claims_history,
            safety_features,
        })
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let storage = FileStore::new(&cli.data_dir);

    match cli.command {
        Command::List => {
            let store = ClientStore::load(storage);
            if store.is_empty() {
                println!("No clients added yet. Create your first client to get started.");
                return Ok(());
            }

            println!(
                "{:<20} {:>14} {:<28} {:<8} {:>12}",
                "Name", "Exposure", "Tier", "Claims", "Added"
            );
            println!("{}", "-".repeat(88));
            for record in store.list() {
                println!(
                    "{:<20} {:>14} {:<28} {:<8} {:>12}",
                    record.name,
                    format!("${}", format_usd(record.liability_exposure)),
                    record.insurance_tier.label(),
                    record.claims_history.as_str(),
                    record.created_at.date_naive().to_string(),
                );
            }
        }

        Command::Dashboard => {
            let store = ClientStore::load(storage);
            print!("{}", DashboardStats::compute(store.list()).render());
        }

        Command::NewClient(args) => {
            let mut store = ClientStore::load(storage);
            let record = store.create(args.into_fields()?)?;
            println!(
                "Client information saved successfully! Recommended insurance tier: {}",
                record.insurance_tier.label()
            );
        }

        Command::UpdateClient { client, fields } => {
            let mut store = ClientStore::load(storage);
            store.update(&client, fields.into_fields()?)?;
            println!("Client information updated successfully!");
        }

        Command::Summary { name } => {
            let store = ClientStore::load(storage);
            let record = store
                .find_by_name(&name)
                .ok_or_else(|| anyhow!("client not found: {}", name))?;
            let summary = ClientSummary::build(record, Local::now().date_naive());
            print!("{}", summary.render());
        }

        Command::Calc { home_value, vehicle_value, income, life_insurance, investments } => {
            let breakdown =
                compute_exposure(home_value, vehicle_value, income, life_insurance, investments);
            let tier = breakdown.tier();

            let lines = [
                ("Home Protection:", breakdown.home_value),
                ("Vehicle Protection:", breakdown.vehicle_value),
                ("Income Protection (10x):", breakdown.income_multiplier),
                ("Life Insurance Gap:", breakdown.life_insurance_gap),
                ("Investment Protection (50%):", breakdown.investment_protection),
                ("Total Liability Exposure:", breakdown.total_exposure),
            ];
            for (label, amount) in lines {
                println!("{:<29}{:>16}", label, format!("${}", format_usd(amount)));
            }
            println!();
            println!("{}", tier.label());
            println!("{}", tier.advisory());
        }

        Command::ExportCsv { path } => {
            let store = ClientStore::load(storage);
            if store.is_empty() {
                bail!("no clients to export");
            }
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_roster_csv(store.list(), file)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Exported {} clients to {}", store.len(), path.display());
        }
    }

    Ok(())
}
