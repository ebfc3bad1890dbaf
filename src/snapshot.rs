//! JSON project snapshot: the raw facts of one analysis.
//!
//! A snapshot carries the component tree, raw measures, issues, new lines and
//! the new-code period. Loading it produces the collaborators a crawl needs.

use crate::component::{ComponentBuilder, ComponentTree, ComponentType, FileAttributes};
use crate::config::RatingSettings;
use crate::crawler::CrawlContext;
use crate::errors::{Error, Result, ResultExt};
use crate::issue::{Issue, IssueRepository};
use crate::measure::{Level, Measure, MeasureRepository, QualityGateStatus};
use crate::metrics::{Metric, MetricCatalog, MetricType};
use crate::newcode::{InMemoryNewLines, Period, PeriodIssueClassifier};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct SnapshotFile {
    root: ComponentRecord,
    #[serde(default)]
    measures: Vec<MeasureRecord>,
    #[serde(default)]
    issues: Vec<IssueRecord>,
    /// Absent when new lines are unknown for the analysis
    #[serde(default)]
    new_lines: Option<BTreeMap<u32, Vec<u32>>>,
    #[serde(default)]
    period: Option<Period>,
    #[serde(default)]
    pull_request: bool,
}

#[derive(Debug, Deserialize)]
struct ComponentRecord {
    #[serde(rename = "ref")]
    reference: u32,
    #[serde(rename = "type")]
    component_type: ComponentType,
    #[serde(default)]
    key: Option<String>,
    #[serde(default)]
    uuid: Option<String>,
    #[serde(default)]
    file_attributes: Option<FileAttributes>,
    #[serde(default)]
    children: Vec<ComponentRecord>,
}

impl ComponentRecord {
    fn into_builder(self) -> ComponentBuilder {
        let mut builder = ComponentBuilder::new(self.component_type, self.reference);
        // Reports without uuids reuse the key
        if let Some(uuid) = self.uuid.or_else(|| self.key.clone()) {
            builder = builder.uuid(uuid);
        }
        if let Some(key) = self.key {
            builder = builder.key(key);
        }
        if let Some(attributes) = self.file_attributes {
            builder = builder.file_attributes(attributes);
        }
        builder.children(self.children.into_iter().map(ComponentRecord::into_builder))
    }
}

#[derive(Debug, Deserialize)]
struct MeasureRecord {
    #[serde(default)]
    component: Option<u32>,
    #[serde(default)]
    metric: Option<String>,
    #[serde(default)]
    value: Value,
    #[serde(default)]
    data: Option<String>,
    #[serde(default)]
    quality_gate_status: Option<QualityGateStatus>,
}

#[derive(Debug, Deserialize)]
struct IssueRecord {
    #[serde(default)]
    component: Option<u32>,
    #[serde(flatten)]
    issue: Issue,
}

/// Raw facts of one analysis, ready to be crawled
#[derive(Debug)]
pub struct Snapshot {
    pub tree: ComponentTree,
    pub measures: MeasureRepository,
    pub issues: IssueRepository,
    pub classifier: PeriodIssueClassifier,
    pub new_lines: InMemoryNewLines,
}

impl Snapshot {
    pub fn load(path: &Path, catalog: &MetricCatalog) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(Error::from)
            .context(format!("reading snapshot {}", path.display()))?;
        Self::from_json(&contents, catalog).context(format!("loading snapshot {}", path.display()))
    }

    pub fn from_json(json: &str, catalog: &MetricCatalog) -> Result<Self> {
        let file: SnapshotFile = serde_json::from_str(json)?;
        let tree = ComponentTree::build(file.root.into_builder())?;

        let mut measures = MeasureRepository::new();
        for record in file.measures {
            let component_ref = record.component.ok_or(Error::NullArgument("component"))?;
            let key = record.metric.as_deref().ok_or(Error::NullArgument("metric"))?;
            let component = tree.component(component_ref)?;
            let metric = catalog.get(key)?;
            let measure = raw_measure(metric, record.value, record.data, record.quality_gate_status)?;
            measures.load_raw(component, metric, measure)?;
        }

        let mut issues = IssueRepository::new();
        for record in file.issues {
            let component_ref = record.component.ok_or(Error::NullArgument("component"))?;
            tree.component(component_ref)?;
            issues.add(component_ref, record.issue);
        }

        let new_lines = match file.new_lines {
            Some(by_component) => {
                let mut new_lines = InMemoryNewLines::available();
                for (component_ref, lines) in by_component {
                    tree.component(component_ref)?;
                    new_lines.set_new_lines(component_ref, lines);
                }
                new_lines
            }
            None => InMemoryNewLines::unavailable(),
        };

        debug!(
            components = tree.len(),
            issues = issues.len(),
            "snapshot loaded"
        );
        Ok(Self {
            tree,
            measures,
            issues,
            classifier: PeriodIssueClassifier::new(file.period, file.pull_request),
            new_lines,
        })
    }

    /// Crawl context over this snapshot
    pub fn context<'a>(
        &'a mut self,
        catalog: &'a MetricCatalog,
        settings: &'a RatingSettings,
    ) -> CrawlContext<'a> {
        CrawlContext {
            tree: &self.tree,
            catalog,
            measures: &mut self.measures,
            issues: &self.issues,
            settings,
            new_issues: &self.classifier,
            new_lines: &self.new_lines,
        }
    }
}

fn raw_measure(
    metric: &Metric,
    value: Value,
    data: Option<String>,
    quality_gate_status: Option<QualityGateStatus>,
) -> Result<Measure> {
    let mut builder = Measure::builder();
    if let Some(status) = quality_gate_status {
        builder = builder.quality_gate_status(status)?;
    }
    if let Some(data) = data {
        builder = builder.data(data);
    }
    if value.is_null() {
        return Ok(builder.create_no_value());
    }

    let mismatch = || {
        Error::invalid_value(format!(
            "value {value} does not fit metric '{}' of type {}",
            metric.key(),
            metric.metric_type()
        ))
    };
    let measure = match metric.metric_type() {
        MetricType::Int | MetricType::Rating => {
            let int = value
                .as_i64()
                .and_then(|v| i32::try_from(v).ok())
                .ok_or_else(mismatch)?;
            builder.create_int(int)
        }
        MetricType::Long | MetricType::WorkDur => builder.create_long(value.as_i64().ok_or_else(mismatch)?),
        MetricType::Double | MetricType::Percent => {
            builder.create_double(value.as_f64().ok_or_else(mismatch)?, metric.effective_decimal_scale())?
        }
        MetricType::Boolean => builder.create_boolean(value.as_bool().ok_or_else(mismatch)?),
        MetricType::String | MetricType::Data => builder.create_string(value.as_str().ok_or_else(mismatch)?),
        MetricType::Level => {
            let name = value.as_str().ok_or_else(mismatch)?;
            match Level::from_dto_name(name) {
                Some(level) => builder.create_level(level),
                None => {
                    warn!(metric = metric.key(), level = name, "unknown level, stored without value");
                    builder.create_no_value()
                }
            }
        }
        MetricType::NoValue => builder.create_no_value(),
    };
    Ok(measure)
}
