//! Ordinal A (best) to E (worst) ratings.
//!
//! A rating is stored as an INT measure holding its index, A = 1 ... E = 5.

use crate::errors::{Error, Result};
use crate::issue::{ImpactSeverity, Severity};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Rating {
    #[default]
    A,
    B,
    C,
    D,
    E,
}

impl Rating {
    pub const ALL: [Rating; 5] = [Rating::A, Rating::B, Rating::C, Rating::D, Rating::E];

    pub fn index(self) -> i32 {
        match self {
            Rating::A => 1,
            Rating::B => 2,
            Rating::C => 3,
            Rating::D => 4,
            Rating::E => 5,
        }
    }

    pub fn from_index(index: i32) -> Result<Self> {
        match index {
            1 => Ok(Rating::A),
            2 => Ok(Rating::B),
            3 => Ok(Rating::C),
            4 => Ok(Rating::D),
            5 => Ok(Rating::E),
            other => Err(Error::invalid_value(format!("{other} is not a rating index"))),
        }
    }

    pub fn from_severity(severity: Severity) -> Self {
        match severity {
            Severity::Blocker => Rating::E,
            Severity::Critical => Rating::D,
            Severity::Major => Rating::C,
            Severity::Minor => Rating::B,
            Severity::Info => Rating::A,
        }
    }

    pub fn from_impact_severity(severity: ImpactSeverity) -> Self {
        match severity {
            ImpactSeverity::Blocker => Rating::E,
            ImpactSeverity::High => Rating::D,
            ImpactSeverity::Medium => Rating::C,
            ImpactSeverity::Low => Rating::B,
            ImpactSeverity::Info => Rating::A,
        }
    }

    /// Security review rating from the percentage of reviewed hotspots
    pub fn from_reviewed_percent(percent: f64) -> Self {
        if percent >= 80.0 {
            Rating::A
        } else if percent >= 70.0 {
            Rating::B
        } else if percent >= 50.0 {
            Rating::C
        } else if percent >= 30.0 {
            Rating::D
        } else {
            Rating::E
        }
    }

    pub fn worst(self, other: Rating) -> Rating {
        self.max(other)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Rating::A => "A",
            Rating::B => "B",
            Rating::C => "C",
            Rating::D => "D",
            Rating::E => "E",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
