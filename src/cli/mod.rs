//! Command-line interface for symptom-matcher.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **check**: Rank likely diseases for a list of symptoms
//! - **catalog**: List, show, or export the disease catalog
//! - **serve**: Start the JSON HTTP API
//!
//! ## Usage
//!
//! ```text
//! # Check symptoms
//! symptom-matcher check fever cough
//!
//! # Comma-separated list, as typed into a form
//! symptom-matcher check --symptoms "fever, sore throat" --age 34
//!
//! # JSON output for scripting
//! symptom-matcher --format json check fever
//!
//! # Use a custom catalog
//! symptom-matcher check headache --catalog my_diseases.json
//!
//! # Start the API server
//! symptom-matcher serve --port 8000
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod catalog;
pub mod check;

#[derive(Parser)]
#[command(name = "symptom-matcher")]
#[command(version)]
#[command(about = "Rank likely diseases from reported symptoms")]
#[command(
    long_about = "symptom-matcher compares reported symptoms against a catalog of known diseases.\n\nFor each disease sharing at least one symptom it reports:\n- A match score combining symptom coverage and disease severity\n- A treatment tier recommendation\n- The recommended specialist and catalogued medicines\n\nResults are advisory and are not a diagnosis."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank likely diseases for reported symptoms
    Check(check::CheckArgs),

    /// Inspect the disease catalog
    Catalog(catalog::CatalogArgs),

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8000")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Maximum results per symptom check
    #[arg(short = 'n', long, default_value = "3")]
    pub max_results: usize,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
