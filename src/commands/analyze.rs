use crate::{config, output, qualitymodel, snapshot::Snapshot};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info_span;

pub struct AnalyzeConfig {
    pub snapshot: PathBuf,
    pub config: Option<PathBuf>,
    pub format: output::OutputFormat,
    pub output: Option<PathBuf>,
    pub include_best_values: bool,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let span = info_span!("analyze", snapshot = %config.snapshot.display());
    let _guard = span.enter();

    let settings_file = config::load_config(config.config.as_deref())?;
    let settings = settings_file.rating_settings()?;
    let catalog = settings_file.metric_catalog()?;

    let mut snapshot = Snapshot::load(&config.snapshot, &catalog)?;
    {
        let mut context = snapshot.context(&catalog, &settings);
        qualitymodel::compute_measures(&mut context)
            .with_context(|| format!("computing measures for {}", config.snapshot.display()))?;
    }

    let measures =
        snapshot
            .measures
            .measures_to_persist(&snapshot.tree, &catalog, !config.include_best_values)?;
    let content = output::render(&measures, config.format)?;
    output::write_output(&content, config.output.as_deref())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn writes_json_measures_for_a_snapshot() {
        let dir = TempDir::new().unwrap();
        let snapshot = dir.path().join("snapshot.json");
        let config_path = dir.path().join("q.toml");
        let output_path = dir.path().join("out").join("measures.json");
        fs::write(&config_path, "[rating]\ndevelopment_cost = \"30\"\n").unwrap();
        fs::write(
            &snapshot,
            indoc! {r#"
                {
                  "root": { "ref": 1, "type": "PROJECT", "key": "p" },
                  "measures": [
                    { "component": 1, "metric": "ncloc", "value": 10 },
                    { "component": 1, "metric": "sqale_index", "value": 100 }
                  ]
                }
            "#},
        )
        .unwrap();

        handle_analyze(AnalyzeConfig {
            snapshot,
            config: Some(config_path),
            format: output::OutputFormat::Json,
            output: Some(output_path.clone()),
            include_best_values: false,
        })
        .unwrap();

        let rows: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output_path).unwrap()).unwrap();
        let ratio = rows
            .as_array()
            .unwrap()
            .iter()
            .find(|row| row["metric"] == "sqale_debt_ratio")
            .unwrap();
        assert_eq!(ratio["value"], 33.3);
    }
}
