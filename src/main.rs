//! # Krishimitra CLI Entry Point
//!
//! This is the main entry point for the Krishimitra command-line front end.
//!
//! ## Overview
//!
//! Krishimitra asks a remote prediction service which crops suit a farm's
//! location and which disease a leaf photo shows. Every answer is tallied in
//! a small local ledger that backs the profile summary.
//!
//! ## Usage
//!
//! ```bash
//! # Crop recommendations for a location
//! krishimitra crop --lat 12.97 --lon 77.59
//!
//! # Diagnose a leaf photo
//! krishimitra disease ./leaf.jpg
//!
//! # Show usage statistics
//! krishimitra profile
//!
//! # Browse supported crops / diseases
//! krishimitra info crops --search ma
//! krishimitra info diseases --search tomato
//!
//! # Point at another service and persist it
//! krishimitra config --set-api-url http://10.170.35.248:5000
//! ```
//!
//! ## Global Flags
//!
//! - `--api-url URL` - Override the prediction service address
//! - `--data-dir DIR` - Override where `ledger.json` lives
//! - `-v` / `--verbose` - Debug logging (`RUST_LOG` is honoured too)

use krishimitra::api::{read_image, Coordinates, HttpPredictionClient};
use krishimitra::app::{catalog, open_ledger, report, Config, ProfileSummary};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Krishimitra - crop recommendations and plant disease detection
#[derive(Parser, Debug)]
#[command(name = "krishimitra")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Smart crop recommender and plant disease detector", long_about = None)]
struct Cli {
    /// Base URL of the prediction service
    #[arg(long, value_name = "URL", global = true)]
    api_url: Option<String>,

    /// Directory holding the usage ledger
    #[arg(long, value_name = "DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recommend crops for a farm location
    Crop {
        /// Latitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },

    /// Detect plant disease from a leaf photo
    Disease {
        /// Path to the leaf image
        #[arg(value_name = "IMAGE")]
        image: PathBuf,
    },

    /// Show the farmer profile and usage statistics
    Profile,

    /// List supported crops or diseases
    Info {
        #[arg(value_enum)]
        kind: InfoKind,

        /// Case-insensitive name filter
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Show or update the saved configuration
    Config {
        /// Save a new prediction service URL
        #[arg(long, value_name = "URL")]
        set_api_url: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum InfoKind {
    Crops,
    Diseases,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run_application(cli).await
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run_application(cli: Cli) -> Result<()> {
    let mut config = Config::load();
    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }

    match cli.command {
        Command::Crop { lat, lon } => {
            let coords = Coordinates::new(lat, lon)?;
            let client =
                HttpPredictionClient::new(&config.api_base_url, config.request_timeout())?;
            let ledger = open_ledger(&config);

            println!("Analyzing your location…");
            let predictions = krishimitra::app::recommend_crops(&client, &ledger, coords)
                .await
                .context("Failed to get crop recommendations")?;
            print!("{}", report::format_predictions(&predictions));
        }
        Command::Disease { image } => {
            let bytes = read_image(&image).await?;
            let client =
                HttpPredictionClient::new(&config.api_base_url, config.request_timeout())?;
            let ledger = open_ledger(&config);

            println!("Analyzing disease...");
            let diagnosis = krishimitra::app::detect_disease(&client, &ledger, bytes)
                .await
                .context("Failed to analyze disease. Try again.")?;
            print!("{}", report::format_diagnosis(&diagnosis));
        }
        Command::Profile => {
            let ledger = open_ledger(&config);
            let snapshot = match ledger.read_snapshot().await {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    tracing::warn!(error = %e, "could not read usage statistics");
                    Default::default()
                }
            };
            let summary = ProfileSummary::from_snapshot(&config.farmer_name, snapshot);
            print!("{}", summary.render());
        }
        Command::Info { kind, search } => {
            let text = match kind {
                InfoKind::Crops => {
                    let crops = catalog::search_crops(&search);
                    if crops.is_empty() {
                        format!("No crops match \"{search}\"\n")
                    } else {
                        report::format_crop_catalog(&crops)
                    }
                }
                InfoKind::Diseases => {
                    let diseases = catalog::search_diseases(&search);
                    if diseases.is_empty() {
                        format!("No diseases match \"{search}\"\n")
                    } else {
                        report::format_disease_catalog(&diseases)
                    }
                }
            };
            print!("{text}");
        }
        Command::Config { set_api_url } => {
            if let Some(url) = set_api_url {
                let mut saved = Config::load();
                saved.api_base_url = url;
                let path = saved.save()?;
                println!("Saved configuration to {}", path.display());
                config.api_base_url = saved.api_base_url;
            }
            println!(
                "{}",
                serde_json::to_string_pretty(&config).context("Failed to serialize config")?
            );
        }
    }

    Ok(())
}
