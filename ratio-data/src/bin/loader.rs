use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ratio_data::FinancialRecordLoader;
use ratio_db_sqlite::SqliteRepository;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Load saved financial records from a CSV file into the database.
///
/// The CSV file must have the following columns:
/// - company_name: Name of the company
/// - period_year: Reporting year (e.g., 2026)
/// - net_income, current_assets, current_liabilities, revenue, total_equity:
///   amounts, plain (1500000) or dot-grouped (1.500.000); blank means zero
///
/// A row for a company and year that is already stored replaces it.
#[derive(Parser, Debug)]
#[command(name = "ratio-data-loader")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing financial records
    #[arg(short, long)]
    file: PathBuf,

    /// SQLite database (path, `sqlite:` URL, or `:memory:`)
    #[arg(short, long, default_value = "ratios.db")]
    database: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();

    let args = Args::parse();

    let repo = SqliteRepository::new(&args.database)
        .await
        .with_context(|| format!("Failed to connect to database: {}", args.database))?;
    repo.run_migrations()
        .await
        .context("Failed to run migrations")?;

    info!("Loading financial records from: {}", args.file.display());

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open: {}", args.file.display()))?;

    let rows = FinancialRecordLoader::parse(file)
        .with_context(|| format!("Failed to parse CSV: {}", args.file.display()))?;

    info!("Parsed {} records from CSV", rows.len());

    let summary = FinancialRecordLoader::load(&repo, &rows)
        .await
        .context("Failed to load financial records into database")?;

    println!(
        "Loaded {} records ({} new, {} replaced).",
        summary.total(),
        summary.created,
        summary.updated
    );

    Ok(())
}
