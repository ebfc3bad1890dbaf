use anyhow::Result;
use clap::Parser;
use qualityrate::cli::{Cli, Commands};
use qualityrate::commands;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Analyze {
            snapshot,
            config,
            format,
            output,
            include_best_values,
        } => commands::handle_analyze(commands::AnalyzeConfig {
            snapshot,
            config,
            format: format.into(),
            output,
            include_best_values,
        }),
        Commands::Metrics { config } => commands::list_metrics(config.as_deref()),
        Commands::ValidateConfig { config } => commands::validate_config(config.as_deref()),
        Commands::Init { force } => commands::init_config(&std::env::current_dir()?, force),
    }
}

// QUALITYRATE_LOG, then RUST_LOG, then the -v count
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = std::env::var("QUALITYRATE_LOG")
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
