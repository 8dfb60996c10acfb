use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::value_objects::Threshold;

/// txpulse: transaction health classifier
///
/// Classifies transactions as normal, long-running or failed against a
/// response-time threshold, summarises them per region and raises alerts.
#[derive(Parser, Debug)]
#[command(name = "txpulse")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Subcommand to execute (defaults to `scan`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to custom config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Overrides for the record source and classification, shared by the
/// batch commands
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct SourceArgs {
    /// Response-time threshold, strictly positive (overrides config)
    #[arg(short, long)]
    pub threshold: Option<Threshold>,

    /// Read transactions from this CSV file instead of the generator
    #[arg(long)]
    pub csv: Option<String>,

    /// Keep only this region (case-insensitive)
    #[arg(short, long)]
    pub region: Option<String>,

    /// Keep only transaction ids starting with this prefix
    #[arg(short, long)]
    pub prefix: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify one batch and print the table, region summary and alerts
    #[command(alias = "sc")]
    Scan {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Send alerts through the configured notification channels
        #[arg(long)]
        notify: bool,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the per-region summary only
    #[command(alias = "s")]
    Summary {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Write a synthetic batch as CSV
    #[command(alias = "g")]
    Generate {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of transactions (overrides config)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for a reproducible batch
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Re-run scan and notify every interval until Ctrl+C
    #[command(alias = "w")]
    Watch {
        /// Interval in seconds (overrides config)
        #[arg(short, long)]
        interval: Option<u64>,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the effective configuration
    #[command(alias = "c")]
    Config {
        /// Print the config file location instead
        #[arg(long)]
        path: bool,
    },
}

impl Commands {
    /// Source overrides carried by this command, if any
    #[must_use]
    pub const fn source_args(&self) -> Option<&SourceArgs> {
        match self {
            Self::Scan { source, .. } | Self::Summary { source, .. } | Self::Watch { source, .. } => {
                Some(source)
            }
            Self::Generate { .. } | Self::Config { .. } => None,
        }
    }
}
