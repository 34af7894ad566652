use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ratio_cli::app::{self, AnalysisForm};
use ratio_cli::chart::{self, DEFAULT_WIDTH};
use ratio_cli::config::{AppConfig, ConfigOverrides};
use ratio_cli::logging::init_logging;
use ratio_cli::report::{render_history, render_report};
use ratio_core::db::DbConfig;
use ratio_core::{RatioKind, RatioRepository, SaveOutcome};
use tracing::debug;

/// Financial ratio calculator: current ratio, net profit margin and return
/// on equity, with a health score and saved history.
#[derive(Parser, Debug)]
#[command(name = "ratio-fin", version, about)]
struct Cli {
    /// Settings file (defaults to $RATIO_FIN_CONFIG, then ./ratio-fin.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Database backend (e.g. "sqlite")
    #[arg(long, global = true)]
    backend: Option<String>,

    /// Connection string passed to the backend (path, URL or ":memory:")
    #[arg(long, global = true)]
    db: Option<String>,

    /// Log level or filter directive, e.g. "debug" or "info,ratio_core=trace".
    /// Takes precedence over RUST_LOG and the config file
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Also append log lines to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute ratios, labels and health score for one period
    Analyze {
        /// Name of the business entity
        #[arg(long)]
        company: String,
        /// Reporting period, e.g. 2026
        #[arg(long)]
        year: String,
        /// Net profit after tax. Amounts accept dot grouping, e.g. 150.000.000
        #[arg(long, allow_hyphen_values = true)]
        net_income: String,
        /// Cash, bank balances and other assets that convert to cash quickly
        #[arg(long, allow_hyphen_values = true)]
        current_assets: String,
        /// Short-term debt due within one year
        #[arg(long, allow_hyphen_values = true)]
        current_liabilities: String,
        /// Total sales for the period
        #[arg(long, allow_hyphen_values = true)]
        revenue: String,
        /// Owners' capital in the company
        #[arg(long, allow_hyphen_values = true)]
        total_equity: String,
        /// Store the figures, replacing any saved record for the same period
        #[arg(long)]
        save: bool,
    },
    /// List saved periods with their ratios
    History {
        #[arg(long)]
        company: Option<String>,
    },
    /// Bar chart of one ratio across saved periods
    Chart {
        #[arg(long)]
        company: Option<String>,
        /// current-ratio, npm or roe
        #[arg(long, default_value = "current-ratio", value_parser = parse_ratio_kind)]
        ratio: RatioKind,
    },
    /// Delete a saved record
    Delete {
        #[arg(long)]
        id: i64,
    },
}

fn parse_ratio_kind(s: &str) -> Result<RatioKind, String> {
    RatioKind::parse(s)
        .ok_or_else(|| format!("unknown ratio '{s}' (expected current-ratio, npm or roe)"))
}

/// Config file values with command-line overrides applied.
fn effective_config(cli: &Cli) -> Result<AppConfig> {
    let config = AppConfig::resolve(cli.config.as_deref())?;
    Ok(config.with_overrides(ConfigOverrides {
        backend: cli.backend.clone(),
        connection_string: cli.db.clone(),
        log_level: cli.log_level.clone(),
        log_file: cli.log_file.clone(),
    }))
}

async fn open_repository(config: &DbConfig) -> Result<Box<dyn RatioRepository>> {
    debug!("connecting to {} backend", config.backend);
    app::build_registry()
        .create(config)
        .await
        .with_context(|| format!("cannot open database '{}'", config.connection_string))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = effective_config(&cli)?;
    init_logging(&config.logging, cli.log_level.as_deref())?;

    match cli.command {
        Command::Analyze {
            company,
            year,
            net_income,
            current_assets,
            current_liabilities,
            revenue,
            total_equity,
            save,
        } => {
            let form = AnalysisForm {
                company_name: company,
                period_year: year,
                net_income,
                current_assets,
                current_liabilities,
                revenue,
                total_equity,
            };
            let input = form.validate()?;

            let repo = if save {
                Some(open_repository(&config.database).await?)
            } else {
                None
            };
            let (report, saved) = app::run_analysis(&input, repo.as_deref()).await?;

            print!("{}", render_report(&report, &input));
            match saved {
                Some(SaveOutcome::Created(record)) => println!("Saved as record {}.", record.id),
                Some(SaveOutcome::Updated(record)) => {
                    println!("Replaced saved record {}.", record.id)
                }
                None => {}
            }
        }
        Command::History { company } => {
            let repo = open_repository(&config.database).await?;
            let trend = app::load_trend(&*repo, company.as_deref()).await?;
            print!("{}", render_history(&trend));
        }
        Command::Chart { company, ratio } => {
            let repo = open_repository(&config.database).await?;
            let trend = app::load_trend(&*repo, company.as_deref()).await?;
            print!("{}", chart::render_bar_chart(ratio, &trend, DEFAULT_WIDTH));
        }
        Command::Delete { id } => {
            let repo = open_repository(&config.database).await?;
            let (company, year) = app::delete_record(&*repo, id)
                .await
                .with_context(|| format!("cannot delete record {id}"))?;
            println!("Deleted record {id} ({company}, {year}).");
        }
    }

    Ok(())
}
