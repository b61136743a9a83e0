//! # Konga Seed Entry Point
//!
//! Resolves the kong node seed set and writes it to stdout as JSON for the
//! seeding routine that persists it.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use konga_seeds::{clock::SystemClock, config::ConfigLoader, seeds::load_kong_nodes, telemetry};

/// Print the kong node seed as JSON
#[derive(Debug, Parser)]
#[command(name = "konga-seed", version)]
struct Args {
    /// JSON data source overriding KONGA_SEED_KONG_NODE_DATA_SOURCE_FILE
    #[arg(long, value_name = "FILE")]
    source: Option<PathBuf>,

    /// Emit compact single-line JSON
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ConfigLoader::new()
        .load()
        .context("loading configuration")?;
    if let Some(source) = args.source {
        config.kong_node_source_file = Some(source);
    }
    config.validate().context("validating configuration")?;

    telemetry::init_tracing(&config).context("initializing telemetry")?;
    tracing::debug!(profile = %config.profile, "configuration loaded");
    if let Ok(config_json) = config.to_json() {
        tracing::debug!(config = %config_json, "effective configuration");
    }

    let nodes = load_kong_nodes(&config, &SystemClock).context("resolving kong node seed")?;

    let rendered = if args.compact {
        serde_json::to_string(&nodes)
    } else {
        serde_json::to_string_pretty(&nodes)
    }
    .context("serializing kong node seed")?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered).context("writing kong node seed")?;

    tracing::info!(count = nodes.len(), "kong node seed written");
    Ok(())
}
