//! Technical debt ratio, maintainability rating and effort to reach rating A.
//!
//! Development cost is computed on files (`ncloc × cost(language)`) and summed
//! up the tree. The remediation effort is each node's own `sqale_index`, which
//! the fact producer has already rolled up.

use super::{add_double, add_measure, add_rating, raw_number};
use crate::component::Component;
use crate::crawler::{Counter, CrawlContext, SubtreeCounters};
use crate::errors::Result;
use crate::measure::Measure;
use crate::metrics::keys;

#[derive(Debug, Default, Clone, Copy)]
struct DevelopmentCost(i64);

impl Counter for DevelopmentCost {
    fn aggregate(&mut self, other: &Self) {
        self.0 += other.0;
    }
}

#[derive(Debug, Default)]
pub struct MaintainabilityVisitor {
    counters: SubtreeCounters<DevelopmentCost>,
}

impl MaintainabilityVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &'static str {
        "maintainability"
    }

    pub fn visit(&mut self, component: &Component, context: &mut CrawlContext<'_>) -> Result<()> {
        let mut cost = self.counters.start(context.tree, component);
        if component.is_file() || !component.has_children() {
            let ncloc = raw_number(context, component, keys::NCLOC)? as i64;
            cost.0 = ncloc * context.settings.dev_cost_for(component.language());
        }
        let effort = raw_number(context, component, keys::TECHNICAL_DEBT)? as i64;

        let density = debt_density(effort, cost.0);
        let grid = *context.settings.grid();
        let rating = grid.rating_for_density(density)?;

        add_measure(context, component, keys::DEVELOPMENT_COST, Measure::long(cost.0))?;
        add_double(context, component, keys::SQALE_DEBT_RATIO, density * 100.0)?;
        add_rating(context, component, keys::MAINTAINABILITY_RATING, rating)?;
        add_measure(
            context,
            component,
            keys::EFFORT_TO_REACH_MAINTAINABILITY_RATING_A,
            Measure::long(effort_to_rating_a(effort, cost.0, grid.rating_a_bound())),
        )?;

        self.counters.finish(component, cost);
        Ok(())
    }
}

/// Debt per unit of development cost; 0 without development cost
pub(crate) fn debt_density(effort: i64, development_cost: i64) -> f64 {
    if development_cost == 0 {
        return 0.0;
    }
    effort as f64 / development_cost as f64
}

/// Effort above what rating A tolerates for this development cost
pub fn effort_to_rating_a(effort: i64, development_cost: i64, rating_a_bound: f64) -> i64 {
    let tolerated = (rating_a_bound * development_cost as f64) as i64;
    (effort - tolerated).max(0)
}
