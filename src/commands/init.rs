use crate::config::CONFIG_FILE_NAME;
use std::fs;
use std::path::Path;

use anyhow::Result;

pub const DEFAULT_CONFIG: &str = r#"# qualityrate configuration

[rating]
# Upper debt density (debt / development cost) of ratings A, B, C and D
debt_rating_grid = "0.05,0.1,0.2,0.5"
# Minutes needed to develop one line of code
development_cost = "30"

# [[rating.language_specific]]
# language = "java"
# development_cost = "30"

# [[metrics]]
# key = "coverage"
# type = "PERCENT"
# best_value = 100.0
# decimal_scale = 1
# direction = "higher_is_better"
"#;

pub fn init_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    fs::write(&config_path, DEFAULT_CONFIG)?;
    println!("Created {} configuration file", config_path.display());

    Ok(())
}
