//! CLI definition using clap

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Parser)]
#[command(name = "amostra-log")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Look up and log lubricant sample records, export the log")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up a sample by code and log it
    Lookup {
        /// Sample code (as scanned or typed)
        code: String,

        /// JSON payload file from the remote lookup; "-" reads stdin
        #[arg(long, short = 'p')]
        payload: PathBuf,
    },

    /// List the logged samples, most recent first
    History,

    /// Clear the logged samples
    Clear,

    /// Export the log as tab-delimited text or an Excel workbook
    Export {
        /// Write an xlsx workbook instead of tab-delimited text
        #[arg(long)]
        excel: bool,

        /// Output file path (defaults to stdout for text, the suggested
        /// file name for excel)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format (json, table)
        #[arg(long)]
        set_format: Option<OutputFormat>,

        /// Set exported workbook file-name prefix
        #[arg(long)]
        set_prefix: Option<String>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}
