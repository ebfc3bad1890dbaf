use super::keys;
use super::{Direction, Metric, MetricType};
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Custom metric definition read from the `[[metrics]]` table of the config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDefinition {
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub metric_type: MetricType,
    #[serde(default)]
    pub best_value: Option<f64>,
    #[serde(default)]
    pub decimal_scale: Option<u32>,
    #[serde(default)]
    pub direction: Direction,
}

impl MetricDefinition {
    fn to_metric(&self) -> Result<Metric> {
        let mut builder = Metric::builder(self.key.clone())
            .metric_type(self.metric_type)
            .direction(self.direction);
        if let Some(name) = &self.name {
            builder = builder.name(name.clone());
        }
        if let Some(best) = self.best_value {
            builder = builder.best_value(best);
        }
        if let Some(scale) = self.decimal_scale {
            builder = builder.decimal_scale(scale);
        }
        builder.build()
    }
}

fn define(
    key: &str,
    name: &str,
    metric_type: MetricType,
    best_value: Option<f64>,
    decimal_scale: Option<u32>,
    direction: Direction,
) -> Metric {
    Metric {
        key: key.to_string(),
        name: name.to_string(),
        metric_type,
        best_value,
        decimal_scale,
        direction,
    }
}

fn rating(key: &str, name: &str) -> Metric {
    define(
        key,
        name,
        MetricType::Rating,
        Some(1.0),
        None,
        Direction::LowerIsBetter,
    )
}

/// Built-in metric definitions
pub fn core_metrics() -> Vec<Metric> {
    use Direction::{HigherIsBetter, LowerIsBetter};
    use MetricType::*;

    vec![
        define(keys::NCLOC, "Lines of Code", Int, None, None, LowerIsBetter),
        define(keys::NCLOC_DATA, "ncloc_data", Data, None, None, Direction::None),
        define(keys::ALERT_STATUS, "Quality Gate Status", Level, None, None, HigherIsBetter),
        // Maintainability
        define(keys::TECHNICAL_DEBT, "Technical Debt", WorkDur, Some(0.0), None, LowerIsBetter),
        define(keys::DEVELOPMENT_COST, "Development Cost", Long, None, None, LowerIsBetter),
        define(keys::SQALE_DEBT_RATIO, "Technical Debt Ratio", Percent, Some(0.0), Some(1), LowerIsBetter),
        rating(keys::MAINTAINABILITY_RATING, "Maintainability Rating"),
        define(
            keys::EFFORT_TO_REACH_MAINTAINABILITY_RATING_A,
            "Effort to Reach Maintainability Rating A",
            WorkDur,
            Some(0.0),
            None,
            LowerIsBetter,
        ),
        define(keys::NEW_TECHNICAL_DEBT, "Added Technical Debt", WorkDur, Some(0.0), None, LowerIsBetter),
        define(keys::NEW_DEVELOPMENT_COST, "Development Cost on New Code", Long, None, None, LowerIsBetter),
        define(keys::NEW_SQALE_DEBT_RATIO, "Technical Debt Ratio on New Code", Percent, Some(0.0), Some(1), LowerIsBetter),
        rating(keys::NEW_MAINTAINABILITY_RATING, "Maintainability Rating on New Code"),
        // Reliability and security
        rating(keys::RELIABILITY_RATING, "Reliability Rating"),
        rating(keys::SECURITY_RATING, "Security Rating"),
        rating(keys::NEW_RELIABILITY_RATING, "Reliability Rating on New Code"),
        rating(keys::NEW_SECURITY_RATING, "Security Rating on New Code"),
        rating(keys::SOFTWARE_QUALITY_RELIABILITY_RATING, "Reliability Rating (software qualities)"),
        rating(keys::SOFTWARE_QUALITY_SECURITY_RATING, "Security Rating (software qualities)"),
        rating(keys::NEW_SOFTWARE_QUALITY_RELIABILITY_RATING, "Reliability Rating on New Code (software qualities)"),
        rating(keys::NEW_SOFTWARE_QUALITY_SECURITY_RATING, "Security Rating on New Code (software qualities)"),
        // Security review
        rating(keys::SECURITY_REVIEW_RATING, "Security Review Rating"),
        define(keys::SECURITY_HOTSPOTS_REVIEWED, "Security Hotspots Reviewed", Percent, Some(100.0), Some(2), HigherIsBetter),
        define(keys::SECURITY_HOTSPOTS_REVIEWED_STATUS, "Reviewed Security Hotspots", Int, None, None, Direction::None),
        define(keys::SECURITY_HOTSPOTS_TO_REVIEW_STATUS, "Security Hotspots to Review", Int, None, None, Direction::None),
        rating(keys::NEW_SECURITY_REVIEW_RATING, "Security Review Rating on New Code"),
        define(keys::NEW_SECURITY_HOTSPOTS_REVIEWED, "Security Hotspots Reviewed on New Code", Percent, Some(100.0), Some(2), HigherIsBetter),
        define(keys::NEW_SECURITY_HOTSPOTS_REVIEWED_STATUS, "Reviewed Security Hotspots on New Code", Int, None, None, Direction::None),
        define(keys::NEW_SECURITY_HOTSPOTS_TO_REVIEW_STATUS, "Security Hotspots to Review on New Code", Int, None, None, Direction::None),
    ]
}

/// Read-only registry of metric definitions, keyed by metric key
#[derive(Debug, Clone, Default)]
pub struct MetricCatalog {
    metrics: BTreeMap<String, Metric>,
}

impl MetricCatalog {
    /// Catalog holding only the built-in metrics
    pub fn core() -> Self {
        let metrics = core_metrics()
            .into_iter()
            .map(|m| (m.key().to_string(), m))
            .collect();
        Self { metrics }
    }

    /// Built-in metrics extended with custom definitions
    pub fn with_definitions(definitions: &[MetricDefinition]) -> Result<Self> {
        let mut catalog = Self::core();
        for definition in definitions {
            let metric = definition.to_metric()?;
            catalog.register(metric)?;
        }
        Ok(catalog)
    }

    pub fn from_metrics(metrics: impl IntoIterator<Item = Metric>) -> Result<Self> {
        let mut catalog = Self::default();
        for metric in metrics {
            catalog.register(metric)?;
        }
        Ok(catalog)
    }

    fn register(&mut self, metric: Metric) -> Result<()> {
        if self.metrics.contains_key(metric.key()) {
            return Err(Error::configuration(format!(
                "metric '{}' is defined more than once",
                metric.key()
            )));
        }
        self.metrics.insert(metric.key().to_string(), metric);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<&Metric> {
        self.metrics
            .get(key)
            .ok_or_else(|| Error::UnknownMetric(key.to_string()))
    }

    pub fn find(&self, key: &str) -> Option<&Metric> {
        self.metrics.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.metrics.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Metric> {
        self.metrics.values()
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_catalog_has_unique_keys() {
        let catalog = MetricCatalog::core();
        assert_eq!(catalog.len(), core_metrics().len());
    }

    #[test]
    fn ratings_have_best_value_a() {
        let catalog = MetricCatalog::core();
        let metric = catalog.get(keys::MAINTAINABILITY_RATING).unwrap();
        assert_eq!(metric.metric_type(), MetricType::Rating);
        assert_eq!(metric.best_value(), Some(1.0));
    }

    #[test]
    fn unknown_key_is_an_error() {
        let catalog = MetricCatalog::core();
        assert!(matches!(
            catalog.get("does_not_exist"),
            Err(Error::UnknownMetric(_))
        ));
    }

    #[test]
    fn custom_definitions_extend_the_catalog() {
        let definitions = vec![MetricDefinition {
            key: "coverage".to_string(),
            name: Some("Coverage".to_string()),
            metric_type: MetricType::Percent,
            best_value: Some(100.0),
            decimal_scale: Some(1),
            direction: Direction::HigherIsBetter,
        }];
        let catalog = MetricCatalog::with_definitions(&definitions).unwrap();
        assert_eq!(catalog.get("coverage").unwrap().name(), "Coverage");
        assert!(catalog.contains(keys::NCLOC));
    }

    #[test]
    fn redefining_a_core_metric_is_a_configuration_error() {
        let definitions = vec![MetricDefinition {
            key: keys::NCLOC.to_string(),
            name: None,
            metric_type: MetricType::Int,
            best_value: None,
            decimal_scale: None,
            direction: Direction::None,
        }];
        assert!(matches!(
            MetricCatalog::with_definitions(&definitions),
            Err(Error::Configuration(_))
        ));
    }
}
