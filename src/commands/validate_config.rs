use crate::config::{self, RatingSettings, CONFIG_FILE_NAME};
use anyhow::Result;
use std::path::Path;

pub fn validate_config(config_path: Option<&Path>) -> Result<()> {
    let source = match config_path {
        Some(path) => path.display().to_string(),
        None => std::env::current_dir()
            .ok()
            .and_then(|dir| config::find_config_file(&dir))
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| format!("defaults (no {CONFIG_FILE_NAME} found)")),
    };
    let loaded = config::load_config(config_path)?;
    let settings = loaded.rating_settings()?;
    let catalog = loaded.metric_catalog()?;

    println!("Configuration: {source}");
    println!("{}", describe_settings(&settings));
    println!("Metrics: {}", catalog.len());
    Ok(())
}

pub fn describe_settings(settings: &RatingSettings) -> String {
    let [a, b, c, d] = settings.grid().boundaries();
    format!(
        "Debt rating grid: A <= {a}, B <= {b}, C <= {c}, D <= {d}, E above\nDevelopment cost: {} min/line",
        settings.development_cost()
    )
}
