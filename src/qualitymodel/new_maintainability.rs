//! Debt ratio and maintainability rating restricted to new lines.
//!
//! On a file, the new development cost counts the code lines of `ncloc_data`
//! that are also new lines. Debt comes from the file's `new_technical_debt`.
//! Directories and the project sum both over their files. Nothing is computed
//! when the analysis has no new-code reference or new lines are unknown.

use super::{add_double, add_measure, add_rating, raw_number, Scope};
use crate::component::Component;
use crate::crawler::{Counter, CrawlContext, SubtreeCounters};
use crate::errors::{Error, Result};
use crate::measure::Measure;
use crate::metrics::keys;
use std::collections::BTreeSet;

use super::maintainability::debt_density;

#[derive(Debug, Default, Clone, Copy)]
struct NewDebtCounter {
    debt: i64,
    development_cost: i64,
}

impl Counter for NewDebtCounter {
    fn aggregate(&mut self, other: &Self) {
        self.debt += other.debt;
        self.development_cost += other.development_cost;
    }
}

#[derive(Debug, Default)]
pub struct NewMaintainabilityVisitor {
    counters: SubtreeCounters<NewDebtCounter>,
}

impl NewMaintainabilityVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &'static str {
        "new_maintainability"
    }

    pub fn visit(&mut self, component: &Component, context: &mut CrawlContext<'_>) -> Result<()> {
        if !Scope::NewCode.is_active(context.new_issues)
            || !context.new_lines.new_lines_available()
        {
            return Ok(());
        }

        let mut counter = self.counters.start(context.tree, component);
        if component.is_file() {
            let new_ncloc = match context.new_lines.new_lines(component) {
                Some(new_lines) => count_new_code_lines(context, component, new_lines)?,
                None => 0,
            };
            counter.development_cost = new_ncloc * context.settings.dev_cost_for(component.language());
            counter.debt = raw_number(context, component, keys::NEW_TECHNICAL_DEBT)? as i64;
        }

        let density = debt_density(counter.debt, counter.development_cost);
        let rating = context.settings.grid().rating_for_density(density)?;

        add_measure(
            context,
            component,
            keys::NEW_DEVELOPMENT_COST,
            Measure::long(counter.development_cost),
        )?;
        add_double(context, component, keys::NEW_SQALE_DEBT_RATIO, density * 100.0)?;
        add_rating(context, component, keys::NEW_MAINTAINABILITY_RATING, rating)?;

        self.counters.finish(component, counter);
        Ok(())
    }
}

fn count_new_code_lines(
    context: &CrawlContext<'_>,
    component: &Component,
    new_lines: &BTreeSet<u32>,
) -> Result<i64> {
    let metric = context.catalog.get(keys::NCLOC_DATA)?;
    let Some(data) = context
        .measures
        .get_raw_measure(component, metric)
        .and_then(|measure| measure.string_value().or(measure.data()))
    else {
        return Ok(0);
    };
    let code_lines = parse_code_lines(data)?;
    Ok(code_lines.intersection(new_lines).count() as i64)
}

/// Lines flagged as code in a `line=flag;line=flag` payload
pub fn parse_code_lines(data: &str) -> Result<BTreeSet<u32>> {
    let mut lines = BTreeSet::new();
    for pair in data.split(';').map(str::trim).filter(|p| !p.is_empty()) {
        let (line, flag) = pair
            .split_once('=')
            .ok_or_else(|| Error::invalid_value(format!("malformed ncloc_data entry '{pair}'")))?;
        let line: u32 = line
            .trim()
            .parse()
            .map_err(|_| Error::invalid_value(format!("malformed line number in '{pair}'")))?;
        if flag.trim() == "1" {
            lines.insert(line);
        }
    }
    Ok(lines)
}
