//! Depth-first visitor execution over the component tree.
//!
//! One crawl walks the tree once for an ordered list of visitors. A visitor
//! declaring [`Order::PreOrder`] sees a node before its children; the others
//! see it after every descendant has been visited, so everything written for
//! the subtree is already in the [`MeasureRepository`].

pub mod counters;

pub use counters::{Counter, SubtreeCounters};

use crate::component::{Component, ComponentTree};
use crate::config::RatingSettings;
use crate::errors::{Error, Result};
use crate::issue::IssueRepository;
use crate::measure::MeasureRepository;
use crate::metrics::MetricCatalog;
use crate::newcode::{NewIssueClassifier, NewLinesRepository};
use tracing::{debug, debug_span};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    PreOrder,
    PostOrder,
}

/// Everything a visitor can read or write during a crawl
pub struct CrawlContext<'a> {
    pub tree: &'a ComponentTree,
    pub catalog: &'a MetricCatalog,
    pub measures: &'a mut MeasureRepository,
    pub issues: &'a IssueRepository,
    pub settings: &'a RatingSettings,
    pub new_issues: &'a dyn NewIssueClassifier,
    pub new_lines: &'a dyn NewLinesRepository,
}

pub trait ComponentVisitor {
    fn name(&self) -> &'static str;

    fn order(&self) -> Order {
        Order::PostOrder
    }

    fn visit(&mut self, component: &Component, context: &mut CrawlContext<'_>) -> Result<()>;
}

/// Runs its visitors over a whole tree, in registration order at each node
pub struct VisitorsCrawler<V> {
    visitors: Vec<V>,
}

impl<V: ComponentVisitor> VisitorsCrawler<V> {
    pub fn new(visitors: Vec<V>) -> Self {
        Self { visitors }
    }

    pub fn visitors(&self) -> &[V] {
        &self.visitors
    }

    pub fn into_visitors(self) -> Vec<V> {
        self.visitors
    }

    /// Crawl from the root. The first visitor error aborts the crawl; measures
    /// already written stay in the repository.
    pub fn visit(&mut self, context: &mut CrawlContext<'_>) -> Result<()> {
        let tree = context.tree;
        let span = debug_span!(
            "crawl",
            components = tree.len(),
            visitors = self.visitors.len()
        );
        let _guard = span.enter();
        self.visit_component(tree.root(), context)
    }

    fn visit_component(&mut self, component: &Component, context: &mut CrawlContext<'_>) -> Result<()> {
        self.run_visitors(Order::PreOrder, component, context)?;
        let tree = context.tree;
        for child in tree.children(component) {
            self.visit_component(child, context)?;
        }
        self.run_visitors(Order::PostOrder, component, context)
    }

    fn run_visitors(
        &mut self,
        order: Order,
        component: &Component,
        context: &mut CrawlContext<'_>,
    ) -> Result<()> {
        for visitor in self.visitors.iter_mut().filter(|v| v.order() == order) {
            debug!(
                visitor = visitor.name(),
                component = component.reference(),
                "visiting"
            );
            visitor
                .visit(component, context)
                .map_err(|e| Error::Visitor {
                    visitor: visitor.name(),
                    component_ref: component.reference(),
                    source: Box::new(e),
                })?;
        }
        Ok(())
    }
}
