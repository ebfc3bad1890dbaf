//! Metric definitions and the catalog they are looked up from.
//!
//! A [`Metric`] is immutable once the catalog is built. The catalog starts from
//! the built-in definitions in [`catalog::core_metrics`] and may be extended
//! with custom definitions read from the configuration file.

pub mod catalog;
pub mod keys;

pub use catalog::{core_metrics, MetricCatalog, MetricDefinition};

use crate::errors::{Error, Result};
use crate::measure::ValueType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decimal scale applied to double measures of metrics that declare none
pub const DEFAULT_DECIMAL_SCALE: u32 = 1;

/// Declared type of a metric's values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetricType {
    Int,
    /// Ordinal A..E stored as its 1..5 index
    Rating,
    Long,
    /// Effort in minutes
    WorkDur,
    Double,
    Percent,
    Boolean,
    String,
    /// Auxiliary payload such as `ncloc_data`
    Data,
    Level,
    NoValue,
}

impl MetricType {
    /// Type of the measures stored for this metric
    pub fn value_type(self) -> ValueType {
        match self {
            MetricType::Int | MetricType::Rating => ValueType::Int,
            MetricType::Long | MetricType::WorkDur => ValueType::Long,
            MetricType::Double | MetricType::Percent => ValueType::Double,
            MetricType::Boolean => ValueType::Boolean,
            MetricType::String | MetricType::Data => ValueType::String,
            MetricType::Level => ValueType::Level,
            MetricType::NoValue => ValueType::NoValue,
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MetricType::Int => "INT",
            MetricType::Rating => "RATING",
            MetricType::Long => "LONG",
            MetricType::WorkDur => "WORK_DUR",
            MetricType::Double => "DOUBLE",
            MetricType::Percent => "PERCENT",
            MetricType::Boolean => "BOOLEAN",
            MetricType::String => "STRING",
            MetricType::Data => "DATA",
            MetricType::Level => "LEVEL",
            MetricType::NoValue => "NO_VALUE",
        };
        f.write_str(name)
    }
}

/// Whether higher or lower values are better
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
    #[default]
    None,
}

/// Definition of a measurable quality attribute
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    key: String,
    name: String,
    metric_type: MetricType,
    best_value: Option<f64>,
    decimal_scale: Option<u32>,
    direction: Direction,
}

impl Metric {
    pub fn builder(key: impl Into<String>) -> MetricBuilder {
        MetricBuilder {
            key: key.into(),
            name: None,
            metric_type: None,
            best_value: None,
            decimal_scale: None,
            direction: Direction::None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn metric_type(&self) -> MetricType {
        self.metric_type
    }

    pub fn value_type(&self) -> ValueType {
        self.metric_type.value_type()
    }

    pub fn best_value(&self) -> Option<f64> {
        self.best_value
    }

    pub fn decimal_scale(&self) -> Option<u32> {
        self.decimal_scale
    }

    /// Scale used when rounding double measures of this metric
    pub fn effective_decimal_scale(&self) -> u32 {
        self.decimal_scale.unwrap_or(DEFAULT_DECIMAL_SCALE)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

#[derive(Debug, Clone)]
pub struct MetricBuilder {
    key: String,
    name: Option<String>,
    metric_type: Option<MetricType>,
    best_value: Option<f64>,
    decimal_scale: Option<u32>,
    direction: Direction,
}

impl MetricBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn metric_type(mut self, metric_type: MetricType) -> Self {
        self.metric_type = Some(metric_type);
        self
    }

    pub fn best_value(mut self, best_value: f64) -> Self {
        self.best_value = Some(best_value);
        self
    }

    pub fn decimal_scale(mut self, scale: u32) -> Self {
        self.decimal_scale = Some(scale);
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn build(self) -> Result<Metric> {
        if self.key.trim().is_empty() {
            return Err(Error::NullArgument("key"));
        }
        let metric_type = self.metric_type.ok_or(Error::NullArgument("metric_type"))?;
        if let Some(best) = self.best_value {
            if !best.is_finite() {
                return Err(Error::invalid_value(format!(
                    "best value of metric '{}' must be finite",
                    self.key
                )));
            }
        }
        Ok(Metric {
            name: self.name.unwrap_or_else(|| self.key.clone()),
            key: self.key,
            metric_type,
            best_value: self.best_value,
            decimal_scale: self.decimal_scale,
            direction: self.direction,
        })
    }
}
