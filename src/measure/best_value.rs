//! Best-value elision.
//!
//! A measure on a FILE that equals its metric's best value, and carries
//! neither data nor a quality gate status, does not need to be persisted:
//! readers reconstruct the best value on a miss.

use super::Measure;
use crate::component::{Component, ComponentType};
use crate::metrics::{Metric, MetricType};

/// Predicate deciding whether measures of one metric on one component are redundant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestValueOptimization {
    target: Option<BestValue>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct BestValue {
    value: f64,
    metric_type: MetricType,
}

impl BestValueOptimization {
    pub fn new(metric: &Metric, component: &Component) -> Self {
        Self::for_type(metric, component.component_type())
    }

    pub fn for_type(metric: &Metric, component_type: ComponentType) -> Self {
        let target = match (component_type, metric.best_value()) {
            (ComponentType::File, Some(value)) => Some(BestValue {
                value,
                metric_type: metric.metric_type(),
            }),
            _ => None,
        };
        Self { target }
    }

    pub fn is_elidable(&self, measure: &Measure) -> bool {
        let Some(best) = self.target else {
            return false;
        };
        if measure.data().is_some() || measure.has_quality_gate_status() {
            return false;
        }
        matches_best_value(measure, best)
    }

    /// The predicate as a closure, for filtering iterators
    pub fn as_predicate(self) -> impl Fn(&Measure) -> bool {
        move |measure| self.is_elidable(measure)
    }
}

fn matches_best_value(measure: &Measure, best: BestValue) -> bool {
    match best.metric_type {
        MetricType::Boolean => measure
            .boolean_value()
            .is_some_and(|v| v == (best.value == 1.0)),
        MetricType::Int | MetricType::Rating => measure
            .int_value()
            .is_some_and(|v| v == best.value as i32),
        MetricType::Long | MetricType::WorkDur => measure
            .long_value()
            .is_some_and(|v| v == best.value as i64),
        MetricType::Double | MetricType::Percent => {
            measure.double_value().is_some_and(|v| v == best.value)
        }
        MetricType::String
        | MetricType::Data
        | MetricType::Level
        | MetricType::NoValue => false,
    }
}
