//! Measure aggregation and rating engine.
//!
//! Raw per-component facts (lines of code, remediation effort, issues,
//! hotspots) are loaded into a [`MeasureRepository`], then a single crawl of
//! the [`ComponentTree`] derives debt ratios and A..E ratings for every
//! component, both overall and restricted to new code.

// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod component;
pub mod config;
pub mod crawler;
pub mod errors;
pub mod issue;
pub mod measure;
pub mod metrics;
pub mod newcode;
pub mod output;
pub mod qualitymodel;
pub mod rating;
pub mod snapshot;

// Re-export commonly used types
pub use crate::component::{Component, ComponentBuilder, ComponentTree, ComponentType, FileAttributes};
pub use crate::config::{DebtRatingGrid, QualityRateConfig, RatingSettings};
pub use crate::crawler::{ComponentVisitor, CrawlContext, Order, VisitorsCrawler};
pub use crate::errors::{Error, Result};
pub use crate::issue::{Issue, IssueRepository, IssueStatus, IssueType, Severity};
pub use crate::measure::{Level, Measure, MeasureRepository, QualityGateStatus, ValueType};
pub use crate::metrics::{Metric, MetricCatalog, MetricType};
pub use crate::newcode::{InMemoryNewLines, NewIssueClassifier, NewLinesRepository, PeriodIssueClassifier};
pub use crate::qualitymodel::{compute_measures, standard_visitors, Scope, Visitor};
pub use crate::rating::Rating;
pub use crate::snapshot::Snapshot;
