//! `merge` - run the restaurant listing merge pipeline once.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pipeline::{run_pipeline, HttpFetcher, RunConfig};

/// Merge the curated base listing with franchise and municipality sources
/// and export the canonical CSV and public JSON feed.
#[derive(Debug, Parser)]
#[command(name = "merge", version)]
struct Args {
    /// Curated base listing CSV
    #[arg(long, default_value = "input/base.csv")]
    base: PathBuf,

    /// Franchise source configuration CSV
    #[arg(long, default_value = "input/sources/franchise_sources.csv")]
    franchise: PathBuf,

    /// Municipality source configuration CSV
    #[arg(long, default_value = "input/sources/municipality_sources.csv")]
    municipality: PathBuf,

    /// Canonical merged CSV output path
    #[arg(long, default_value = "output/ozicme_restaurants_merged.csv")]
    output_csv: PathBuf,

    /// Public JSON feed output path
    #[arg(long, default_value = "output/public-restaurants.json")]
    output_json: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pipeline=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = RunConfig {
        base_csv: args.base,
        franchise_csv: args.franchise,
        municipality_csv: args.municipality,
        output_csv: args.output_csv,
        output_json: args.output_json,
    };

    info!(
        base = %config.base_csv.display(),
        "starting restaurant merge pipeline"
    );

    let fetcher = HttpFetcher::new();
    let summary = run_pipeline(&config, &fetcher)
        .await
        .context("merge pipeline failed")?;

    if !summary.is_success() {
        warn!(
            failed = summary.failures.len(),
            "some sources were skipped; see the manual-review queue"
        );
    }

    println!(
        "Merged {} records ({} sources ingested, {} failed): {}, {}",
        summary.merged_records,
        summary.sources_ingested,
        summary.failures.len(),
        config.output_csv.display(),
        config.output_json.display()
    );
    Ok(())
}
