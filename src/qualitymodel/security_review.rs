//! Security review rating and percentage of reviewed hotspots.

use super::{add_double, add_measure, add_rating, Scope};
use crate::component::Component;
use crate::crawler::{Counter, CrawlContext, SubtreeCounters};
use crate::errors::Result;
use crate::issue::Issue;
use crate::measure::Measure;
use crate::metrics::keys;
use crate::rating::Rating;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HotspotCounter {
    pub reviewed: u64,
    pub to_review: u64,
}

impl Counter for HotspotCounter {
    fn aggregate(&mut self, other: &Self) {
        self.reviewed += other.reviewed;
        self.to_review += other.to_review;
    }
}

impl HotspotCounter {
    pub fn add_hotspots<'i>(&mut self, issues: impl IntoIterator<Item = &'i Issue>) {
        for issue in issues {
            if issue.is_reviewed_hotspot() {
                self.reviewed += 1;
            } else if issue.is_hotspot_to_review() && !issue.is_resolved() {
                self.to_review += 1;
            }
        }
    }

    /// `None` when there is no hotspot to count
    pub fn reviewed_percent(&self) -> Option<f64> {
        let total = self.reviewed + self.to_review;
        if total == 0 {
            return None;
        }
        Some(self.reviewed as f64 * 100.0 / total as f64)
    }

    pub fn rating(&self) -> Rating {
        self.reviewed_percent()
            .map_or(Rating::A, Rating::from_reviewed_percent)
    }
}

#[derive(Debug)]
pub struct SecurityReviewVisitor {
    scope: Scope,
    counters: SubtreeCounters<HotspotCounter>,
}

impl SecurityReviewVisitor {
    pub fn new(scope: Scope) -> Self {
        Self {
            scope,
            counters: SubtreeCounters::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self.scope {
            Scope::Overall => "security_review",
            Scope::NewCode => "new_security_review",
        }
    }

    pub fn visit(&mut self, component: &Component, context: &mut CrawlContext<'_>) -> Result<()> {
        if !self.scope.is_active(context.new_issues) {
            return Ok(());
        }

        let mut counter = self.counters.start(context.tree, component);
        let classifier = context.new_issues;
        let scope = self.scope;
        counter.add_hotspots(
            context
                .issues
                .issues_of(component)
                .iter()
                .filter(|issue| scope.includes(classifier, component, issue)),
        );

        add_rating(
            context,
            component,
            scope.key(keys::SECURITY_REVIEW_RATING, keys::NEW_SECURITY_REVIEW_RATING),
            counter.rating(),
        )?;
        if let Some(percent) = counter.reviewed_percent() {
            add_double(
                context,
                component,
                scope.key(
                    keys::SECURITY_HOTSPOTS_REVIEWED,
                    keys::NEW_SECURITY_HOTSPOTS_REVIEWED,
                ),
                percent,
            )?;
        }
        if component.component_type().is_root_type() && context.tree.parent(component).is_none() {
            add_measure(
                context,
                component,
                scope.key(
                    keys::SECURITY_HOTSPOTS_REVIEWED_STATUS,
                    keys::NEW_SECURITY_HOTSPOTS_REVIEWED_STATUS,
                ),
                Measure::int(saturating_i32(counter.reviewed)),
            )?;
            add_measure(
                context,
                component,
                scope.key(
                    keys::SECURITY_HOTSPOTS_TO_REVIEW_STATUS,
                    keys::NEW_SECURITY_HOTSPOTS_TO_REVIEW_STATUS,
                ),
                Measure::int(saturating_i32(counter.to_review)),
            )?;
        }

        self.counters.finish(component, counter);
        Ok(())
    }
}

fn saturating_i32(count: u64) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}
