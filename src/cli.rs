use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "qualityrate")]
#[command(about = "Aggregate code-quality facts into debt ratios and ratings", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (can be repeated: -v, -vv)
    /// -v: Show progress information
    /// -vv: Show per-component visitor activity
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute ratings and ratios for a project snapshot
    Analyze {
        /// JSON snapshot of the project (tree, raw measures, issues, new lines)
        snapshot: PathBuf,

        /// Configuration file (defaults to the nearest .qualityrate.toml)
        #[arg(short, long, env = "QUALITYRATE_CONFIG")]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep measures equal to their metric's best value on files
        #[arg(long = "include-best-values")]
        include_best_values: bool,
    },

    /// List the metric catalog
    Metrics {
        /// Configuration file declaring custom metrics
        #[arg(short, long, env = "QUALITYRATE_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Load and validate the rating settings
    ValidateConfig {
        /// Configuration file (defaults to the nearest .qualityrate.toml)
        #[arg(short, long, env = "QUALITYRATE_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Write a default .qualityrate.toml in the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

impl From<OutputFormat> for crate::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Table => crate::output::OutputFormat::Table,
            OutputFormat::Json => crate::output::OutputFormat::Json,
        }
    }
}
