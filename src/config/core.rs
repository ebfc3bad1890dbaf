use serde::{Deserialize, Serialize};

use super::rating::{RatingConfig, RatingSettings};
use crate::errors::{Result, ResultExt};
use crate::metrics::{MetricCatalog, MetricDefinition};

/// Root configuration structure, read from `.qualityrate.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct QualityRateConfig {
    /// Debt rating grid and development costs
    #[serde(default)]
    pub rating: RatingConfig,

    /// Custom metrics added to the built-in catalog
    #[serde(default)]
    pub metrics: Vec<MetricDefinition>,
}

impl QualityRateConfig {
    pub fn rating_settings(&self) -> Result<RatingSettings> {
        RatingSettings::from_config(&self.rating).context("invalid [rating] settings")
    }

    pub fn metric_catalog(&self) -> Result<MetricCatalog> {
        MetricCatalog::with_definitions(&self.metrics).context("invalid [[metrics]] definitions")
    }
}
