//! Rating and ratio visitors.
//!
//! Every family comes in an overall and a new-code flavour sharing the same
//! aggregation; the flavour only decides which facts are counted
//! ([`Scope`]) and whether the visitor runs at all.

pub mod issue_rating;
pub mod maintainability;
pub mod new_maintainability;
pub mod security_review;

pub use issue_rating::{IssueRatingVisitor, RatingFamily};
pub use maintainability::MaintainabilityVisitor;
pub use new_maintainability::NewMaintainabilityVisitor;
pub use security_review::SecurityReviewVisitor;

use crate::component::Component;
use crate::crawler::{ComponentVisitor, CrawlContext, Order, VisitorsCrawler};
use crate::errors::Result;
use crate::issue::Issue;
use crate::measure::Measure;
use crate::newcode::NewIssueClassifier;
use crate::rating::Rating;
use tracing::info;

/// Which facts a visitor counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Overall,
    NewCode,
}

impl Scope {
    /// New-code visitors stay silent when the analysis has no new-code reference
    pub fn is_active(self, classifier: &dyn NewIssueClassifier) -> bool {
        match self {
            Scope::Overall => true,
            Scope::NewCode => classifier.is_enabled(),
        }
    }

    pub fn includes(self, classifier: &dyn NewIssueClassifier, component: &Component, issue: &Issue) -> bool {
        match self {
            Scope::Overall => true,
            Scope::NewCode => classifier.is_new(component, issue),
        }
    }

    /// Pick the metric key matching this scope
    pub fn key(self, overall: &'static str, new_code: &'static str) -> &'static str {
        match self {
            Scope::Overall => overall,
            Scope::NewCode => new_code,
        }
    }
}

/// The closed set of visitors the quality model is made of
#[derive(Debug)]
pub enum Visitor {
    Maintainability(MaintainabilityVisitor),
    NewMaintainability(NewMaintainabilityVisitor),
    IssueRating(IssueRatingVisitor),
    SecurityReview(SecurityReviewVisitor),
}

impl ComponentVisitor for Visitor {
    fn name(&self) -> &'static str {
        match self {
            Visitor::Maintainability(v) => v.name(),
            Visitor::NewMaintainability(v) => v.name(),
            Visitor::IssueRating(v) => v.name(),
            Visitor::SecurityReview(v) => v.name(),
        }
    }

    fn order(&self) -> Order {
        Order::PostOrder
    }

    fn visit(&mut self, component: &Component, context: &mut CrawlContext<'_>) -> Result<()> {
        match self {
            Visitor::Maintainability(v) => v.visit(component, context),
            Visitor::NewMaintainability(v) => v.visit(component, context),
            Visitor::IssueRating(v) => v.visit(component, context),
            Visitor::SecurityReview(v) => v.visit(component, context),
        }
    }
}

/// Visitors of a full analysis, in execution order
pub fn standard_visitors() -> Vec<Visitor> {
    vec![
        Visitor::Maintainability(MaintainabilityVisitor::new()),
        Visitor::NewMaintainability(NewMaintainabilityVisitor::new()),
        Visitor::IssueRating(IssueRatingVisitor::new(RatingFamily::Severity, Scope::Overall)),
        Visitor::IssueRating(IssueRatingVisitor::new(RatingFamily::Severity, Scope::NewCode)),
        Visitor::IssueRating(IssueRatingVisitor::new(RatingFamily::SoftwareQuality, Scope::Overall)),
        Visitor::IssueRating(IssueRatingVisitor::new(RatingFamily::SoftwareQuality, Scope::NewCode)),
        Visitor::SecurityReview(SecurityReviewVisitor::new(Scope::Overall)),
        Visitor::SecurityReview(SecurityReviewVisitor::new(Scope::NewCode)),
    ]
}

/// Run the standard visitors over the whole tree
pub fn compute_measures(context: &mut CrawlContext<'_>) -> Result<()> {
    let mut crawler = VisitorsCrawler::new(standard_visitors());
    crawler.visit(context)?;
    info!(
        components = context.tree.len(),
        measures = context.measures.added_count(),
        "quality model computed"
    );
    Ok(())
}

pub(crate) fn add_measure(
    context: &mut CrawlContext<'_>,
    component: &Component,
    key: &str,
    measure: Measure,
) -> Result<()> {
    let catalog = context.catalog;
    let metric = catalog.get(key)?;
    context.measures.add(component, metric, measure)
}

/// Double measure rounded to the metric's decimal scale
pub(crate) fn add_double(
    context: &mut CrawlContext<'_>,
    component: &Component,
    key: &str,
    value: f64,
) -> Result<()> {
    let catalog = context.catalog;
    let metric = catalog.get(key)?;
    let measure = Measure::double(value, metric.effective_decimal_scale())?;
    context.measures.add(component, metric, measure)
}

pub(crate) fn add_rating(
    context: &mut CrawlContext<'_>,
    component: &Component,
    key: &str,
    rating: Rating,
) -> Result<()> {
    add_measure(context, component, key, Measure::int(rating.index()))
}

/// Raw numeric fact of a component, 0 when absent
pub(crate) fn raw_number(context: &CrawlContext<'_>, component: &Component, key: &str) -> Result<f64> {
    let metric = context.catalog.get(key)?;
    Ok(context
        .measures
        .get_raw_measure(component, metric)
        .and_then(Measure::as_f64)
        .unwrap_or(0.0))
}
