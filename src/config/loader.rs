use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::QualityRateConfig;
use crate::errors::{Error, Result, ResultExt};

pub const CONFIG_FILE_NAME: &str = ".qualityrate.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate config from a TOML string.
///
/// Validation runs here so that a malformed grid fails before any crawl.
pub fn parse_and_validate_config(contents: &str) -> Result<QualityRateConfig> {
    let config = toml::from_str::<QualityRateConfig>(contents)?;
    config.rating_settings()?;
    config.metric_catalog()?;
    Ok(config)
}

/// Load an explicitly requested config file; a missing file is an error
pub fn load_config_from(path: &Path) -> Result<QualityRateConfig> {
    let contents = read_config_file(path)
        .map_err(Error::from)
        .context(format!("reading {}", path.display()))?;
    let config = parse_and_validate_config(&contents).context(format!("loading {}", path.display()))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Nearest config file at or above `start`
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|path| path.is_file())
}

/// Search upward from `start` for a config file; defaults when none exists.
///
/// A file that exists but does not parse or validate is an error.
pub fn load_config_search(start: &Path) -> Result<QualityRateConfig> {
    match find_config_file(start) {
        Some(path) => load_config_from(&path),
        None => {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            Ok(QualityRateConfig::default())
        }
    }
}

/// Explicit path if given, else search from the current directory
pub fn load_config(explicit: Option<&Path>) -> Result<QualityRateConfig> {
    if let Some(path) = explicit {
        return load_config_from(path);
    }
    match std::env::current_dir() {
        Ok(current) => load_config_search(&current),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            Ok(QualityRateConfig::default())
        }
    }
}
