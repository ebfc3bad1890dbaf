//! Typed measure values.
//!
//! A [`Measure`] carries exactly one value of a closed set of types (or none),
//! an optional auxiliary data string and an optional quality gate status.
//! Measures are immutable: "updating" one means building a replacement, see
//! [`Measure::updated`].

pub mod best_value;
pub mod repository;

pub use best_value::BestValueOptimization;
pub use repository::{MeasureRepository, MeasureSource, PersistableMeasure};

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Storage type of a measure value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueType {
    NoValue,
    Int,
    Long,
    Double,
    Boolean,
    String,
    Level,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::NoValue => "NO_VALUE",
            ValueType::Int => "INT",
            ValueType::Long => "LONG",
            ValueType::Double => "DOUBLE",
            ValueType::Boolean => "BOOLEAN",
            ValueType::String => "STRING",
            ValueType::Level => "LEVEL",
        };
        f.write_str(name)
    }
}

/// Quality gate level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Ok,
    Warn,
    Error,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Ok => "OK",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    /// Lenient lookup used for externally produced values: names are
    /// case-sensitive and anything unrecognized yields `None`.
    pub fn from_dto_name(name: &str) -> Option<Level> {
        match name {
            "OK" => Some(Level::Ok),
            "WARN" => Some(Level::Warn),
            "ERROR" => Some(Level::Error),
            _ => None,
        }
    }

    /// Strict lookup: an unrecognized or mis-cased name is an `InvalidValue`.
    pub fn parse(name: &str) -> Result<Level> {
        Self::from_dto_name(name)
            .ok_or_else(|| Error::invalid_value(format!("'{name}' is not a valid level")))
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Level::parse(s)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quality gate evaluation attached to a measure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityGateStatus {
    pub status: Level,
    #[serde(default)]
    pub text: Option<String>,
}

impl QualityGateStatus {
    pub fn new(status: Level) -> Self {
        Self { status, text: None }
    }

    pub fn with_text(status: Level, text: impl Into<String>) -> Self {
        Self {
            status,
            text: Some(text.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MeasureValue {
    NoValue,
    Int(i32),
    Long(i64),
    Double(f64),
    Boolean(bool),
    String(String),
    Level(Level),
}

impl MeasureValue {
    pub fn value_type(&self) -> ValueType {
        match self {
            MeasureValue::NoValue => ValueType::NoValue,
            MeasureValue::Int(_) => ValueType::Int,
            MeasureValue::Long(_) => ValueType::Long,
            MeasureValue::Double(_) => ValueType::Double,
            MeasureValue::Boolean(_) => ValueType::Boolean,
            MeasureValue::String(_) => ValueType::String,
            MeasureValue::Level(_) => ValueType::Level,
        }
    }
}

impl fmt::Display for MeasureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasureValue::NoValue => f.write_str("-"),
            MeasureValue::Int(v) => write!(f, "{v}"),
            MeasureValue::Long(v) => write!(f, "{v}"),
            MeasureValue::Double(v) => write!(f, "{v}"),
            MeasureValue::Boolean(v) => write!(f, "{v}"),
            MeasureValue::String(v) => f.write_str(v),
            MeasureValue::Level(v) => write!(f, "{v}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measure {
    value: MeasureValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    quality_gate_status: Option<QualityGateStatus>,
}

impl Measure {
    pub fn builder() -> MeasureBuilder {
        MeasureBuilder::default()
    }

    pub fn int(value: i32) -> Self {
        Self::builder().create_int(value)
    }

    pub fn long(value: i64) -> Self {
        Self::builder().create_long(value)
    }

    pub fn double(value: f64, decimal_scale: u32) -> Result<Self> {
        Self::builder().create_double(value, decimal_scale)
    }

    pub fn boolean(value: bool) -> Self {
        Self::builder().create_boolean(value)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::builder().create_string(value)
    }

    pub fn level(value: Level) -> Self {
        Self::builder().create_level(value)
    }

    /// Level measure from an externally supplied name; unknown names degrade
    /// to a measure without value instead of failing.
    pub fn level_from_dto(name: &str) -> Self {
        match Level::from_dto_name(name) {
            Some(level) => Self::level(level),
            None => Self::no_value(),
        }
    }

    pub fn no_value() -> Self {
        Self::builder().create_no_value()
    }

    /// Builder for a replacement of this measure that keeps its quality gate status
    pub fn updated(&self) -> MeasureBuilder {
        MeasureBuilder {
            data: None,
            quality_gate_status: self.quality_gate_status.clone(),
        }
    }

    pub fn value(&self) -> &MeasureValue {
        &self.value
    }

    pub fn value_type(&self) -> ValueType {
        self.value.value_type()
    }

    pub fn int_value(&self) -> Option<i32> {
        match self.value {
            MeasureValue::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn long_value(&self) -> Option<i64> {
        match self.value {
            MeasureValue::Long(v) => Some(v),
            _ => None,
        }
    }

    pub fn double_value(&self) -> Option<f64> {
        match self.value {
            MeasureValue::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn boolean_value(&self) -> Option<bool> {
        match self.value {
            MeasureValue::Boolean(v) => Some(v),
            _ => None,
        }
    }

    pub fn string_value(&self) -> Option<&str> {
        match &self.value {
            MeasureValue::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn level_value(&self) -> Option<Level> {
        match self.value {
            MeasureValue::Level(v) => Some(v),
            _ => None,
        }
    }

    /// Numeric view of INT, LONG and DOUBLE values
    pub fn as_f64(&self) -> Option<f64> {
        match self.value {
            MeasureValue::Int(v) => Some(f64::from(v)),
            MeasureValue::Long(v) => Some(v as f64),
            MeasureValue::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    pub fn quality_gate_status(&self) -> Option<&QualityGateStatus> {
        self.quality_gate_status.as_ref()
    }

    pub fn has_quality_gate_status(&self) -> bool {
        self.quality_gate_status.is_some()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MeasureBuilder {
    data: Option<String>,
    quality_gate_status: Option<QualityGateStatus>,
}

impl MeasureBuilder {
    /// Attach a quality gate status; a measure carries at most one.
    pub fn quality_gate_status(mut self, status: QualityGateStatus) -> Result<Self> {
        if self.quality_gate_status.is_some() {
            return Err(Error::invalid_value(
                "quality gate status can only be set once",
            ));
        }
        self.quality_gate_status = Some(status);
        Ok(self)
    }

    /// Auxiliary payload for numeric, boolean or level measures
    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    fn finish(self, value: MeasureValue) -> Measure {
        Measure {
            value,
            data: self.data,
            quality_gate_status: self.quality_gate_status,
        }
    }

    pub fn create_int(self, value: i32) -> Measure {
        self.finish(MeasureValue::Int(value))
    }

    pub fn create_long(self, value: i64) -> Measure {
        self.finish(MeasureValue::Long(value))
    }

    /// Double measure rounded half-up to `decimal_scale`; NaN is rejected
    pub fn create_double(self, value: f64, decimal_scale: u32) -> Result<Measure> {
        if value.is_nan() {
            return Err(Error::invalid_value("NaN is not a valid measure value"));
        }
        Ok(self.finish(MeasureValue::Double(round_half_up(value, decimal_scale))))
    }

    pub fn create_boolean(self, value: bool) -> Measure {
        self.finish(MeasureValue::Boolean(value))
    }

    /// String measure; its data is the string itself
    pub fn create_string(mut self, value: impl Into<String>) -> Measure {
        let value = value.into();
        self.data = Some(value.clone());
        self.finish(MeasureValue::String(value))
    }

    pub fn create_level(self, value: Level) -> Measure {
        self.finish(MeasureValue::Level(value))
    }

    pub fn create_no_value(self) -> Measure {
        self.finish(MeasureValue::NoValue)
    }
}

/// Round in decimal (not binary) semantics, ties away from zero.
///
/// Shifting through the decimal string keeps `1.005` at scale 2 at `1.01`
/// where `(1.005 * 100.0).round()` would give `1.0`.
pub fn round_half_up(value: f64, decimal_scale: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimal_scale as i32);
    let shifted = format!("{value}e{decimal_scale}")
        .parse::<f64>()
        .unwrap_or(value * factor);
    shifted.round() / factor
}
