//! New-code partitioning: which issues and which lines belong to new code.
//!
//! Both collaborators are frozen before a crawl starts.

use crate::component::Component;
use crate::issue::Issue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

pub trait NewIssueClassifier {
    /// False when the analysis has no new-code reference at all
    fn is_enabled(&self) -> bool;

    fn is_new(&self, component: &Component, issue: &Issue) -> bool;
}

pub trait NewLinesRepository {
    fn new_lines_available(&self) -> bool;

    /// New line numbers of a file, `None` when unknown for that file
    fn new_lines(&self, component: &Component) -> Option<&BTreeSet<u32>>;
}

/// New-code reference period of the analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub mode: String,
    #[serde(default)]
    pub parameter: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

impl Period {
    pub fn since(mode: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            mode: mode.into(),
            parameter: None,
            date: Some(date),
        }
    }
}

/// Classifies issues against the analysis period, or treats every issue as new
/// on a pull request.
#[derive(Debug, Clone, Default)]
pub struct PeriodIssueClassifier {
    period: Option<Period>,
    pull_request: bool,
}

impl PeriodIssueClassifier {
    pub fn new(period: Option<Period>, pull_request: bool) -> Self {
        Self {
            period,
            pull_request,
        }
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn pull_request() -> Self {
        Self::new(None, true)
    }

    pub fn period(&self) -> Option<&Period> {
        self.period.as_ref()
    }

    fn period_date(&self) -> Option<DateTime<Utc>> {
        self.period.as_ref().and_then(|period| period.date)
    }
}

impl NewIssueClassifier for PeriodIssueClassifier {
    fn is_enabled(&self) -> bool {
        self.pull_request || self.period_date().is_some()
    }

    fn is_new(&self, _component: &Component, issue: &Issue) -> bool {
        if self.pull_request {
            return true;
        }
        self.period_date()
            .is_some_and(|date| issue.creation_date > date)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryNewLines {
    available: bool,
    by_component: HashMap<u32, BTreeSet<u32>>,
}

impl InMemoryNewLines {
    /// Repository reporting that new lines are known
    pub fn available() -> Self {
        Self {
            available: true,
            by_component: HashMap::new(),
        }
    }

    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn set_new_lines(&mut self, component_ref: u32, lines: impl IntoIterator<Item = u32>) {
        self.by_component
            .insert(component_ref, lines.into_iter().collect());
    }

    pub fn with_new_lines(mut self, component_ref: u32, lines: impl IntoIterator<Item = u32>) -> Self {
        self.set_new_lines(component_ref, lines);
        self
    }
}

impl NewLinesRepository for InMemoryNewLines {
    fn new_lines_available(&self) -> bool {
        self.available
    }

    fn new_lines(&self, component: &Component) -> Option<&BTreeSet<u32>> {
        if !self.available {
            return None;
        }
        self.by_component.get(&component.reference())
    }
}
