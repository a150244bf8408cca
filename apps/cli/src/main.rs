//! # Decora CLI
//!
//! Command-line flow for the interior-cost estimator.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Estimator Flow                                   │
//! │                                                                         │
//! │  decora estimate --bhk 3BHK --kitchen 1 --wardrobe 3 ...               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  input ceilings (effective_max_count) ──► validate ──► estimate        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  print three tiers (compact + exact) ──► save result                   │
//! │                                                                         │
//! │  decora last                                                            │
//! │       └── reload and reprint the previously saved result               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use decora_core::catalog::{effective_max_count, line_item};
use decora_core::estimate::calculate_all_estimates;
use decora_core::format::format_indian_price;
use decora_core::types::{
    CalculatorResult, LineItemId, PackageTier, PropertyType, RequirementSet,
};
use decora_core::validation::validate_requirements;
use decora_store::{ResultRepository, SqliteStore, StoreConfig};

// =============================================================================
// CLI Surface
// =============================================================================

/// Interior cost estimator for the Decora marketplace.
#[derive(Debug, Parser)]
#[command(name = "decora", version, about)]
struct Cli {
    /// Path to the saved-result database.
    #[arg(long, global = true, default_value = "decora.db")]
    db: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute package estimates for a requirement checklist.
    Estimate {
        /// Property type: 1BHK, 2BHK, 3BHK, 3+BHK or modular-kitchen.
        #[arg(long)]
        bhk: PropertyType,

        /// Number of kitchens.
        #[arg(long, default_value_t = 0)]
        kitchen: u32,

        /// Number of wardrobes.
        #[arg(long, default_value_t = 0)]
        wardrobe: u32,

        /// Number of entertainment units.
        #[arg(long, default_value_t = 0)]
        entertainment: u32,

        /// Number of study units.
        #[arg(long, default_value_t = 0)]
        study: u32,

        /// Number of crockery units.
        #[arg(long, default_value_t = 0)]
        crockery: u32,
    },

    /// Show the previously saved estimate.
    Last,
}

// =============================================================================
// Entry Point
// =============================================================================

#[tokio::main]
async fn main() -> ExitCode {
    // Quiet by default; RUST_LOG=debug shows store operations
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let store = SqliteStore::open(StoreConfig::new(&cli.db)).await?;
    let repo = ResultRepository::new(Arc::new(store));

    match cli.command {
        Command::Estimate {
            bhk,
            kitchen,
            wardrobe,
            entertainment,
            study,
            crockery,
        } => {
            let requirements = RequirementSet::new()
                .with(LineItemId::Kitchen, kitchen)
                .with(LineItemId::Wardrobe, wardrobe)
                .with(LineItemId::EntertainmentUnit, entertainment)
                .with(LineItemId::StudyUnit, study)
                .with(LineItemId::CrockeryUnit, crockery);

            estimate_flow(&repo, bhk, requirements).await
        }
        Command::Last => last_flow(&repo).await,
    }
}

// =============================================================================
// Flows
// =============================================================================

/// Validate, estimate, print, persist.
async fn estimate_flow(
    repo: &ResultRepository,
    bhk: PropertyType,
    requirements: RequirementSet,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Input-time ceilings, as the checklist's increment controls apply
    // them. Wardrobe and kitchen rules go through the validator so the
    // user sees the canonical messages.
    for (item, count) in requirements.iter() {
        if matches!(item, LineItemId::Kitchen | LineItemId::Wardrobe) {
            continue;
        }
        let max = effective_max_count(item, bhk);
        if count > max {
            let label = line_item(item).map(|entry| entry.label).unwrap_or("item");
            eprintln!("{label} count can't exceed {max}");
            return Ok(ExitCode::FAILURE);
        }
    }

    if let Err(err) = validate_requirements(bhk, &requirements) {
        eprintln!("{err}");
        return Ok(ExitCode::FAILURE);
    }

    let estimates = calculate_all_estimates(&requirements);

    println!("Estimate for {bhk}");
    println!();
    for tier in PackageTier::ALL {
        let total = estimates.for_tier(tier);
        println!(
            "  {:<10} {:<12} ({})",
            tier.to_string(),
            format_indian_price(total),
            total
        );
    }

    let result = CalculatorResult::new(bhk, requirements, estimates, Utc::now());
    match repo.save(&result).await {
        Ok(()) => info!("Result saved"),
        // A lost save only costs the restore affordance; the estimate
        // above has already been shown
        Err(err) => warn!(error = %err, "Could not save result"),
    }

    Ok(ExitCode::SUCCESS)
}

/// Reload and reprint the previously saved result.
async fn last_flow(repo: &ResultRepository) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let Some(result) = repo.load_last().await else {
        println!("No saved estimate yet.");
        return Ok(ExitCode::SUCCESS);
    };

    println!("Last estimate: {}", result.bhk_type);
    if let Some(completed_at) = result.completed_at() {
        println!("Computed at:   {}", completed_at.to_rfc3339());
    }
    println!();
    for tier in PackageTier::ALL {
        let total = result.estimates.for_tier(tier);
        println!(
            "  {:<10} {:<12} ({})",
            tier.to_string(),
            format_indian_price(total),
            total
        );
    }

    Ok(ExitCode::SUCCESS)
}
