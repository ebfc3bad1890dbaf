//! Rendering of computed measures.

pub mod json;
pub mod table;

pub use json::render_json;
pub use table::render_table;

use crate::errors::Result;
use crate::measure::{MeasureValue, PersistableMeasure};
use crate::metrics::MetricType;
use crate::rating::Rating;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

/// One output line: a measure of one metric on one component
#[derive(Debug, Clone, Serialize)]
pub struct MeasureRow<'a> {
    pub component_ref: u32,
    pub component_key: &'a str,
    pub component_type: String,
    pub metric: &'a str,
    pub value: &'a MeasureValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<&'a str>,
}

impl<'a> From<&PersistableMeasure<'a>> for MeasureRow<'a> {
    fn from(entry: &PersistableMeasure<'a>) -> Self {
        let rating = match entry.metric.metric_type() {
            MetricType::Rating => entry
                .measure
                .int_value()
                .and_then(|index| Rating::from_index(index).ok()),
            _ => None,
        };
        Self {
            component_ref: entry.component.reference(),
            component_key: entry.component.key(),
            component_type: entry.component.component_type().to_string(),
            metric: entry.metric.key(),
            value: entry.measure.value(),
            rating,
            data: entry.measure.data(),
        }
    }
}

pub fn rows<'a>(measures: &[PersistableMeasure<'a>]) -> Vec<MeasureRow<'a>> {
    measures.iter().map(MeasureRow::from).collect()
}

pub fn render(measures: &[PersistableMeasure<'_>], format: OutputFormat) -> Result<String> {
    let rows = rows(measures);
    match format {
        OutputFormat::Table => Ok(render_table(&rows)),
        OutputFormat::Json => render_json(&rows),
    }
}

/// Write to `output`, creating parent directories, or print to stdout
pub fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            let mut file = fs::File::create(path)?;
            file.write_all(content.as_bytes())?;
        }
        None => println!("{content}"),
    }
    Ok(())
}
