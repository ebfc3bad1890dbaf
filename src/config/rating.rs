use crate::errors::{Error, Result};
use crate::rating::Rating;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_DEBT_RATING_GRID: &str = "0.05,0.1,0.2,0.5";
pub const DEFAULT_DEVELOPMENT_COST: &str = "30";

/// `[rating]` table of the configuration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingConfig {
    /// Comma separated upper bounds of ratings A to D, as debt density
    #[serde(default = "default_debt_rating_grid")]
    pub debt_rating_grid: String,

    /// Minutes needed to develop one line of code
    #[serde(default = "default_development_cost")]
    pub development_cost: String,

    #[serde(default)]
    pub language_specific: Vec<LanguageCost>,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            debt_rating_grid: default_debt_rating_grid(),
            development_cost: default_development_cost(),
            language_specific: Vec::new(),
        }
    }
}

fn default_debt_rating_grid() -> String {
    DEFAULT_DEBT_RATING_GRID.to_string()
}

fn default_development_cost() -> String {
    DEFAULT_DEVELOPMENT_COST.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageCost {
    pub language: String,
    pub development_cost: String,
}

/// Four ascending debt-density boundaries separating ratings A..E
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebtRatingGrid {
    boundaries: [f64; 4],
}

impl DebtRatingGrid {
    pub fn new(boundaries: [f64; 4]) -> Result<Self> {
        if let Some(bad) = boundaries.iter().find(|b| !b.is_finite() || **b < 0.0) {
            return Err(Error::configuration(format!(
                "debt rating grid values must be non-negative numbers, got {bad}"
            )));
        }
        if boundaries.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(Error::configuration(format!(
                "debt rating grid values must be strictly ascending, got {boundaries:?}"
            )));
        }
        Ok(Self { boundaries })
    }

    /// Parse a comma separated list such as `0.05,0.1,0.2,0.5`
    pub fn parse(grid: &str) -> Result<Self> {
        let values = grid
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<f64>().map_err(|_| {
                    Error::configuration(format!(
                        "debt rating grid value '{part}' is not a number"
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let boundaries: [f64; 4] = values.try_into().map_err(|values: Vec<f64>| {
            Error::configuration(format!(
                "debt rating grid must contain 4 values, got {}",
                values.len()
            ))
        })?;
        Self::new(boundaries)
    }

    pub fn boundaries(&self) -> [f64; 4] {
        self.boundaries
    }

    /// Upper density bound of rating A
    pub fn rating_a_bound(&self) -> f64 {
        self.boundaries[0]
    }

    /// Rating of a debt density (ratio / 100); a boundary value belongs to the
    /// better band.
    pub fn rating_for_density(&self, density: f64) -> Result<Rating> {
        if density.is_nan() || density < 0.0 {
            return Err(Error::invalid_value(format!(
                "debt density must be non-negative, got {density}"
            )));
        }
        let [a, b, c, d] = self.boundaries;
        let rating = if density > d {
            Rating::E
        } else if density > c {
            Rating::D
        } else if density > b {
            Rating::C
        } else if density > a {
            Rating::B
        } else {
            Rating::A
        };
        Ok(rating)
    }
}

impl Default for DebtRatingGrid {
    fn default() -> Self {
        Self {
            boundaries: [0.05, 0.1, 0.2, 0.5],
        }
    }
}

/// Validated rating settings, fixed for one analysis
#[derive(Debug, Clone, PartialEq)]
pub struct RatingSettings {
    grid: DebtRatingGrid,
    development_cost: i64,
    language_costs: HashMap<String, i64>,
}

impl RatingSettings {
    pub fn new(grid: DebtRatingGrid, development_cost: i64) -> Result<Self> {
        if development_cost < 0 {
            return Err(Error::configuration(format!(
                "development cost must be non-negative, got {development_cost}"
            )));
        }
        Ok(Self {
            grid,
            development_cost,
            language_costs: HashMap::new(),
        })
    }

    pub fn from_config(config: &RatingConfig) -> Result<Self> {
        let grid = DebtRatingGrid::parse(&config.debt_rating_grid)?;
        let mut settings = Self::new(grid, parse_cost(&config.development_cost)?)?;
        for language in &config.language_specific {
            let cost = parse_cost(&language.development_cost)?;
            settings = settings.with_language_cost(&language.language, cost)?;
        }
        Ok(settings)
    }

    pub fn with_language_cost(mut self, language: &str, development_cost: i64) -> Result<Self> {
        if development_cost < 0 {
            return Err(Error::configuration(format!(
                "development cost of language '{language}' must be non-negative"
            )));
        }
        if self
            .language_costs
            .insert(language.to_string(), development_cost)
            .is_some()
        {
            return Err(Error::configuration(format!(
                "development cost of language '{language}' is defined more than once"
            )));
        }
        Ok(self)
    }

    pub fn grid(&self) -> &DebtRatingGrid {
        &self.grid
    }

    pub fn development_cost(&self) -> i64 {
        self.development_cost
    }

    /// Cost of the given language, or the default cost
    pub fn dev_cost_for(&self, language: Option<&str>) -> i64 {
        language
            .and_then(|language| self.language_costs.get(language))
            .copied()
            .unwrap_or(self.development_cost)
    }
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            grid: DebtRatingGrid::default(),
            development_cost: 30,
            language_costs: HashMap::new(),
        }
    }
}

fn parse_cost(value: &str) -> Result<i64> {
    let value = value.trim();
    value.parse::<i64>().map_err(|_| {
        Error::configuration(format!("development cost '{value}' is not an integer"))
    })
}
