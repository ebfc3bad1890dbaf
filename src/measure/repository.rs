//! Per-run measure store.
//!
//! Entries are keyed by `(component ref, metric key)`. Raw entries come from the
//! fact source before the crawl; added entries are written by visitors. A key
//! holds at most one entry regardless of its source.

use super::{BestValueOptimization, Measure, ValueType};
use crate::component::{Component, ComponentTree};
use crate::errors::{Error, Result};
use crate::metrics::{keys, Metric, MetricCatalog};
use std::collections::{BTreeMap, HashMap};
use tracing::trace;

/// Where a stored measure comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureSource {
    /// Loaded from the report or the previous analysis
    Raw,
    /// Computed during this run
    Added,
}

#[derive(Debug, Clone)]
struct Entry {
    measure: Measure,
    source: MeasureSource,
}

/// An added measure selected for persistence
#[derive(Debug, Clone, Copy)]
pub struct PersistableMeasure<'a> {
    pub component: &'a Component,
    pub metric: &'a Metric,
    pub measure: &'a Measure,
}

#[derive(Debug, Default)]
pub struct MeasureRepository {
    entries: HashMap<u32, BTreeMap<String, Entry>>,
}

impl MeasureRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fact produced outside this run
    pub fn load_raw(&mut self, component: &Component, metric: &Metric, measure: Measure) -> Result<()> {
        self.insert(component, metric, measure, MeasureSource::Raw)
    }

    /// Store a measure computed during this run. Each key can be added once.
    pub fn add(&mut self, component: &Component, metric: &Metric, measure: Measure) -> Result<()> {
        self.insert(component, metric, measure, MeasureSource::Added)
    }

    fn insert(
        &mut self,
        component: &Component,
        metric: &Metric,
        measure: Measure,
        source: MeasureSource,
    ) -> Result<()> {
        check_value_type(metric, &measure)?;
        let by_metric = self.entries.entry(component.reference()).or_default();
        if by_metric.contains_key(metric.key()) {
            return Err(Error::AlreadyExists {
                component_ref: component.reference(),
                metric: metric.key().to_string(),
            });
        }
        by_metric.insert(metric.key().to_string(), Entry { measure, source });
        Ok(())
    }

    /// Replace an existing measure. Nothing from the previous measure is carried
    /// over; use [`Measure::updated`] to keep its quality gate status.
    pub fn update(&mut self, component: &Component, metric: &Metric, measure: Measure) -> Result<()> {
        let entry = self
            .entries
            .get_mut(&component.reference())
            .and_then(|by_metric| by_metric.get_mut(metric.key()))
            .ok_or_else(|| Error::NotFound {
                component_ref: component.reference(),
                metric: metric.key().to_string(),
            })?;
        check_value_type(metric, &measure)?;
        entry.measure = measure;
        Ok(())
    }

    /// Raw measure of a component; `ncloc` is hidden on test files
    pub fn get_raw_measure(&self, component: &Component, metric: &Metric) -> Option<&Measure> {
        if is_filtered(component, metric.key()) {
            return None;
        }
        self.find(component, metric.key(), MeasureSource::Raw)
    }

    /// All raw measures of a component, by metric key
    pub fn get_raw_measures(&self, component: &Component) -> BTreeMap<&str, &Measure> {
        self.measures_from(component, MeasureSource::Raw)
            .filter(|(key, _)| !is_filtered(component, key))
            .collect()
    }

    pub fn get_added_measure(&self, component: &Component, metric: &Metric) -> Option<&Measure> {
        self.find(component, metric.key(), MeasureSource::Added)
    }

    pub fn get_added_measures(&self, component: &Component) -> BTreeMap<&str, &Measure> {
        self.measures_from(component, MeasureSource::Added).collect()
    }

    /// Measure of either source
    pub fn get_measure(&self, component: &Component, metric: &Metric) -> Option<&Measure> {
        self.entries
            .get(&component.reference())
            .and_then(|by_metric| by_metric.get(metric.key()))
            .map(|entry| &entry.measure)
    }

    pub fn source_of(&self, component: &Component, metric: &Metric) -> Option<MeasureSource> {
        self.entries
            .get(&component.reference())
            .and_then(|by_metric| by_metric.get(metric.key()))
            .map(|entry| entry.source)
    }

    /// Number of added measures across all components
    pub fn added_count(&self) -> usize {
        self.entries
            .values()
            .flat_map(BTreeMap::values)
            .filter(|entry| entry.source == MeasureSource::Added)
            .count()
    }

    /// Added measures in pre-order of the tree, metric keys sorted.
    ///
    /// With `elide_best_values`, measures the [`BestValueOptimization`] marks
    /// redundant are skipped.
    pub fn measures_to_persist<'a>(
        &'a self,
        tree: &'a ComponentTree,
        catalog: &'a MetricCatalog,
        elide_best_values: bool,
    ) -> Result<Vec<PersistableMeasure<'a>>> {
        let mut selected = Vec::new();
        for component in tree.pre_order() {
            for (key, measure) in self.measures_from(component, MeasureSource::Added) {
                let metric = catalog.get(key)?;
                if elide_best_values
                    && BestValueOptimization::new(metric, component).is_elidable(measure)
                {
                    trace!(component = component.reference(), metric = key, "best value elided");
                    continue;
                }
                selected.push(PersistableMeasure {
                    component,
                    metric,
                    measure,
                });
            }
        }
        Ok(selected)
    }

    fn find(&self, component: &Component, key: &str, source: MeasureSource) -> Option<&Measure> {
        self.entries
            .get(&component.reference())
            .and_then(|by_metric| by_metric.get(key))
            .filter(|entry| entry.source == source)
            .map(|entry| &entry.measure)
    }

    fn measures_from<'a>(
        &'a self,
        component: &Component,
        source: MeasureSource,
    ) -> impl Iterator<Item = (&'a str, &'a Measure)> + 'a {
        self.entries
            .get(&component.reference())
            .into_iter()
            .flat_map(|by_metric| by_metric.iter())
            .filter(move |(_, entry)| entry.source == source)
            .map(|(key, entry)| (key.as_str(), &entry.measure))
    }
}

fn is_filtered(component: &Component, metric_key: &str) -> bool {
    metric_key == keys::NCLOC && component.is_test_file()
}

fn check_value_type(metric: &Metric, measure: &Measure) -> Result<()> {
    let actual = measure.value_type();
    let expected = metric.value_type();
    if actual == ValueType::NoValue || actual == expected {
        return Ok(());
    }
    Err(Error::TypeMismatch {
        metric: metric.key().to_string(),
        expected,
        actual,
    })
}
