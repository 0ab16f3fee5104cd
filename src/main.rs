//! `award-intervals` — find the producers with the shortest and longest gaps
//! between consecutive award wins.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config ([`config::load_config`]) and resolve the award list path.
//! 3. Import the award list into a [`store::memory::MemoryStore`], exploding
//!    multi-producer attributions with [`producers::split`] ([`ingest`]).
//! 4. Answer the requested query ([`awards`], [`predict`]); interval extremes
//!    come from [`intervals::aggregate`].
//! 5. Render the report ([`report`]).
//! 6. Exit `0`, or `1` with the error on stderr.

mod awards;
mod cli;
mod config;
mod error;
mod ingest;
mod intervals;
mod models;
mod predict;
mod producers;
mod report;
mod store;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, ReportFormat};
use config::{load_config, resolve_data_path, Config, CSV_PATH_ENV};
use ingest::IngestOptions;
use store::memory::MemoryStore;
use store::{AwardRepository, RecordFilter};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        // Splitting needs no data
        Command::Split { text } => {
            let names = producers::split(text);
            match cli.report {
                ReportFormat::Terminal => report::terminal::render_names(&names)?,
                ReportFormat::Json => report::json::render(&names)?,
            }
        }
        Command::Awards | Command::Details => {
            let (_, store) = open(&cli)?;
            let result = awards::calculate_awards(&store)?;
            let links = matches!(cli.command, Command::Details);
            match cli.report {
                ReportFormat::Terminal => report::terminal::render_awards(&result, links, cli.quiet)?,
                ReportFormat::Json if links => {
                    report::json::render(&report::json::details_document(&result)?)?
                }
                ReportFormat::Json => report::json::render(&result)?,
            }
        }
        Command::Movies(args) => {
            let (_, store) = open(&cli)?;
            let records = awards::list_movies(&store, &RecordFilter::from(args))?;
            match cli.report {
                ReportFormat::Terminal => report::terminal::render_movies(&records, cli.quiet)?,
                ReportFormat::Json => report::json::render(&records)?,
            }
        }
        Command::Producer { name } => {
            let (_, store) = open(&cli)?;
            let details = awards::producer_details(&store, name)?;
            match cli.report {
                ReportFormat::Terminal => report::terminal::render_producer(&details, cli.quiet)?,
                ReportFormat::Json => report::json::render(&details)?,
            }
        }
        Command::Winners { year } => {
            let (_, store) = open(&cli)?;
            let winners = awards::winners_of_year(&store, *year)?;
            match cli.report {
                ReportFormat::Terminal => report::terminal::render_winners(&winners)?,
                ReportFormat::Json => report::json::render(&winners)?,
            }
        }
        Command::Predict { producer, studio } => {
            let (config, store) = open(&cli)?;
            let records = store.find(&RecordFilter::default())?;
            let index = predict::PairIndex::build(&records);
            let prediction = index.predict(producer, studio, config.predict.threshold)?;
            match cli.report {
                ReportFormat::Terminal => {
                    report::terminal::render_prediction(producer, studio, prediction)?
                }
                ReportFormat::Json => report::json::render(&serde_json::json!({
                    "producer": producer,
                    "studio": studio,
                    "prediction": prediction,
                }))?,
            }
        }
    }

    Ok(())
}

/// Load the config and import the award list it points at.
fn open(cli: &Cli) -> Result<(Config, MemoryStore)> {
    let config = load_config(cli.config.as_deref())?;
    let store = load_store(cli, &config)?;
    Ok((config, store))
}

fn load_store(cli: &Cli, config: &Config) -> Result<MemoryStore> {
    let path = resolve_data_path(config, cli.data.as_deref(), std::env::var(CSV_PATH_ENV).ok());
    let options = IngestOptions {
        delimiter: config.data.delimiter,
        fold_case: config.ingest.fold_case,
    };

    let pb = if !cli.quiet && cli.report == ReportFormat::Terminal {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut store = MemoryStore::new();
    let summary = ingest::load_file(&path, &mut store, &options, pb.as_ref())
        .with_context(|| format!("Failed to load award list {}", path.display()))?;
    if store.is_empty() {
        tracing::warn!(path = %path.display(), "award list holds no records");
    }

    if let Some(pb) = pb {
        pb.finish_and_clear();
        eprintln!(
            "  {} {} rows, {} records ({} duplicates skipped)",
            "→".cyan(),
            summary.rows,
            store.len(),
            summary.duplicates
        );
    }

    Ok(store)
}
