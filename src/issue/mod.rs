//! Issues and security hotspots attached to components.

use crate::component::Component;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueType {
    Bug,
    Vulnerability,
    CodeSmell,
    SecurityHotspot,
}

/// Legacy issue severity, declared from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Info,
    Minor,
    Major,
    Critical,
    Blocker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SoftwareQuality {
    Maintainability,
    Reliability,
    Security,
}

/// Severity of an issue's impact on one software quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImpactSeverity {
    Info,
    Low,
    Medium,
    High,
    Blocker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueStatus {
    Open,
    Confirmed,
    Reopened,
    Resolved,
    Closed,
    ToReview,
    Reviewed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub key: String,
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub severity: Severity,
    #[serde(default)]
    pub impacts: BTreeMap<SoftwareQuality, ImpactSeverity>,
    pub status: IssueStatus,
    #[serde(default)]
    pub resolution: Option<String>,
    pub creation_date: DateTime<Utc>,
}

impl Issue {
    /// Open issue without impacts, created at the Unix epoch
    pub fn new(key: impl Into<String>, issue_type: IssueType, severity: Severity) -> Self {
        let status = if issue_type == IssueType::SecurityHotspot {
            IssueStatus::ToReview
        } else {
            IssueStatus::Open
        };
        Self {
            key: key.into(),
            issue_type,
            severity,
            impacts: BTreeMap::new(),
            status,
            resolution: None,
            creation_date: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    pub fn with_impact(mut self, quality: SoftwareQuality, severity: ImpactSeverity) -> Self {
        self.impacts.insert(quality, severity);
        self
    }

    pub fn with_status(mut self, status: IssueStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_resolution(mut self, resolution: impl Into<String>) -> Self {
        self.resolution = Some(resolution.into());
        self
    }

    pub fn created_at(mut self, creation_date: DateTime<Utc>) -> Self {
        self.creation_date = creation_date;
        self
    }

    pub fn is_resolved(&self) -> bool {
        self.resolution.is_some()
    }

    pub fn is_hotspot(&self) -> bool {
        self.issue_type == IssueType::SecurityHotspot
    }

    pub fn is_reviewed_hotspot(&self) -> bool {
        self.is_hotspot() && self.status == IssueStatus::Reviewed
    }

    pub fn is_hotspot_to_review(&self) -> bool {
        self.is_hotspot() && self.status == IssueStatus::ToReview
    }

    pub fn impact(&self, quality: SoftwareQuality) -> Option<ImpactSeverity> {
        self.impacts.get(&quality).copied()
    }
}

/// Issues of each component, not of its subtree
#[derive(Debug, Clone, Default)]
pub struct IssueRepository {
    by_component: HashMap<u32, Vec<Issue>>,
}

impl IssueRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, component_ref: u32, issue: Issue) {
        self.by_component.entry(component_ref).or_default().push(issue);
    }

    pub fn extend(&mut self, component_ref: u32, issues: impl IntoIterator<Item = Issue>) {
        self.by_component
            .entry(component_ref)
            .or_default()
            .extend(issues);
    }

    pub fn issues_of(&self, component: &Component) -> &[Issue] {
        self.by_component
            .get(&component.reference())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.by_component.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
