//! Reliability and security ratings from the worst unresolved issue of a subtree.

use super::{add_rating, Scope};
use crate::component::Component;
use crate::crawler::{Counter, CrawlContext, SubtreeCounters};
use crate::errors::Result;
use crate::issue::{Issue, IssueType, SoftwareQuality};
use crate::metrics::keys;
use crate::rating::Rating;

/// How an issue is turned into a rating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingFamily {
    /// Issue type (BUG, VULNERABILITY) and legacy severity
    Severity,
    /// Impact severity on the RELIABILITY and SECURITY software qualities
    SoftwareQuality,
}

impl RatingFamily {
    /// Rating an issue imposes on (reliability, security)
    fn ratings_of(self, issue: &Issue) -> (Option<Rating>, Option<Rating>) {
        match self {
            RatingFamily::Severity => match issue.issue_type {
                IssueType::Bug => (Some(Rating::from_severity(issue.severity)), None),
                IssueType::Vulnerability => (None, Some(Rating::from_severity(issue.severity))),
                IssueType::CodeSmell | IssueType::SecurityHotspot => (None, None),
            },
            RatingFamily::SoftwareQuality => {
                if issue.is_hotspot() {
                    return (None, None);
                }
                (
                    issue
                        .impact(SoftwareQuality::Reliability)
                        .map(Rating::from_impact_severity),
                    issue
                        .impact(SoftwareQuality::Security)
                        .map(Rating::from_impact_severity),
                )
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WorstRatings {
    pub reliability: Rating,
    pub security: Rating,
}

impl Counter for WorstRatings {
    fn aggregate(&mut self, other: &Self) {
        self.reliability = self.reliability.worst(other.reliability);
        self.security = self.security.worst(other.security);
    }
}

impl WorstRatings {
    /// Fold unresolved issues into the ratings
    pub fn add_issues<'i>(&mut self, family: RatingFamily, issues: impl IntoIterator<Item = &'i Issue>) {
        for issue in issues.into_iter().filter(|issue| !issue.is_resolved()) {
            let (reliability, security) = family.ratings_of(issue);
            if let Some(rating) = reliability {
                self.reliability = self.reliability.worst(rating);
            }
            if let Some(rating) = security {
                self.security = self.security.worst(rating);
            }
        }
    }
}

#[derive(Debug)]
pub struct IssueRatingVisitor {
    family: RatingFamily,
    scope: Scope,
    counters: SubtreeCounters<WorstRatings>,
}

impl IssueRatingVisitor {
    pub fn new(family: RatingFamily, scope: Scope) -> Self {
        Self {
            family,
            scope,
            counters: SubtreeCounters::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        match (self.family, self.scope) {
            (RatingFamily::Severity, Scope::Overall) => "reliability_and_security_ratings",
            (RatingFamily::Severity, Scope::NewCode) => "new_reliability_and_security_ratings",
            (RatingFamily::SoftwareQuality, Scope::Overall) => "software_quality_ratings",
            (RatingFamily::SoftwareQuality, Scope::NewCode) => "new_software_quality_ratings",
        }
    }

    fn metric_keys(&self) -> (&'static str, &'static str) {
        match self.family {
            RatingFamily::Severity => (
                self.scope.key(keys::RELIABILITY_RATING, keys::NEW_RELIABILITY_RATING),
                self.scope.key(keys::SECURITY_RATING, keys::NEW_SECURITY_RATING),
            ),
            RatingFamily::SoftwareQuality => (
                self.scope.key(
                    keys::SOFTWARE_QUALITY_RELIABILITY_RATING,
                    keys::NEW_SOFTWARE_QUALITY_RELIABILITY_RATING,
                ),
                self.scope.key(
                    keys::SOFTWARE_QUALITY_SECURITY_RATING,
                    keys::NEW_SOFTWARE_QUALITY_SECURITY_RATING,
                ),
            ),
        }
    }

    pub fn visit(&mut self, component: &Component, context: &mut CrawlContext<'_>) -> Result<()> {
        if !self.scope.is_active(context.new_issues) {
            return Ok(());
        }

        let mut ratings = self.counters.start(context.tree, component);
        let classifier = context.new_issues;
        let scope = self.scope;
        ratings.add_issues(
            self.family,
            context
                .issues
                .issues_of(component)
                .iter()
                .filter(|issue| scope.includes(classifier, component, issue)),
        );

        let (reliability_key, security_key) = self.metric_keys();
        add_rating(context, component, reliability_key, ratings.reliability)?;
        add_rating(context, component, security_key, ratings.security)?;

        self.counters.finish(component, ratings);
        Ok(())
    }
}
