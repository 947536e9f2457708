//! rcgrab main entry point
//!
//! This is the command-line interface for the episode resolution pipeline.

use clap::Parser;
use rcgrab::config::{load_config, validate, Config};
use rcgrab::engine::{intake_channel, DownloadJob};
use rcgrab::pipeline::Coordinator;
use std::path::PathBuf;
use tokio::sync::mpsc::Receiver;
use tracing_subscriber::EnvFilter;

/// rcgrab: resolve every episode of a show into playable stream URLs
///
/// rcgrab discovers the episode pages of a show, extracts the embedded
/// player configuration from each one, resolves it through the media
/// validation API, and hands each resolved stream URL to the download
/// engine's intake queue.
#[derive(Parser, Debug)]
#[command(name = "rcgrab")]
#[command(version = "0.1.0")]
#[command(about = "Resolve a show's episodes into downloadable stream URLs", long_about = None)]
struct Cli {
    /// URL of the show to download
    #[arg(value_name = "SHOW_URL")]
    show_url: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Destination directory handed to the download engine
    #[arg(long, value_name = "DIR")]
    dest: Option<String>,

    /// Fallback filename stem for episodes without a usable URL slug
    #[arg(long, value_name = "NAME")]
    filename: Option<String>,

    /// Ask the engine to skip its converter step
    #[arg(long)]
    skip_converter: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let (intake, receiver) = intake_channel(config.download.intake_capacity);
    let engine = tokio::spawn(drain_intake(receiver));

    let coordinator = Coordinator::new(config, intake)?;
    let summary = match coordinator.run(&cli.show_url).await {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!("Episode discovery failed: {}", e);
            std::process::exit(1);
        }
    };

    // Dropping the coordinator closes the intake; the consumer drains what
    // remains and exits.
    drop(coordinator);
    engine.await?;

    for report in &summary.episodes {
        if !report.state.is_success() {
            tracing::warn!("Episode {} was not submitted: {}", report.url, report.state);
        }
    }
    tracing::info!(
        "{} of {} episodes submitted",
        summary.submitted,
        summary.episodes.len()
    );

    Ok(())
}

/// Loads the configuration file (if any) and applies CLI overrides
fn build_config(cli: &Cli) -> Result<Config, rcgrab::ConfigError> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };

    if let Some(dest) = &cli.dest {
        config.download.dest_path = dest.clone();
    }
    if let Some(filename) = &cli.filename {
        config.download.filename = filename.clone();
    }
    if cli.skip_converter {
        config.download.skip_converter = true;
    }

    // Overrides can break invariants the file-level check already passed.
    validate(&config)?;
    Ok(config)
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("rcgrab=info,warn"),
            1 => EnvFilter::new("rcgrab=debug,info"),
            2 => EnvFilter::new("rcgrab=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Stand-in consumer for the external download engine's intake
///
/// Surfaces each accepted job on stdout. Wiring a real engine means handing
/// it the receiver instead of this loop; everything upstream is unchanged.
async fn drain_intake(mut receiver: Receiver<DownloadJob>) {
    while let Some(job) = receiver.recv().await {
        println!("-> {}", job.url);
        tracing::debug!(
            "Engine accepted {} as {}/{} (skip_converter: {})",
            job.url,
            job.dest_path,
            job.filename,
            job.skip_converter
        );
    }
}
