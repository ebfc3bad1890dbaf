use crate::config;
use crate::metrics::MetricCatalog;
use anyhow::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use std::path::Path;

pub fn list_metrics(config_path: Option<&Path>) -> Result<()> {
    let catalog = config::load_config(config_path)?.metric_catalog()?;
    println!("{}", render_catalog(&catalog));
    Ok(())
}

pub fn render_catalog(catalog: &MetricCatalog) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Key", "Name", "Type", "Best value", "Scale", "Direction"]);
    for metric in catalog.iter() {
        table.add_row(vec![
            metric.key().to_string(),
            metric.name().to_string(),
            metric.metric_type().to_string(),
            metric
                .best_value()
                .map(|v| v.to_string())
                .unwrap_or_default(),
            metric
                .decimal_scale()
                .map(|s| s.to_string())
                .unwrap_or_default(),
            format!("{:?}", metric.direction()),
        ]);
    }
    table.to_string()
}
