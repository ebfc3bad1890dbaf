//! Per-subtree accumulation for post-order visitors.

use crate::component::{Component, ComponentTree};
use std::collections::HashMap;

/// Value accumulated over a subtree
pub trait Counter: Default {
    fn aggregate(&mut self, other: &Self);
}

/// Counters of visited components whose parent has not been visited yet.
///
/// A child's counter is dropped once merged into its parent, so memory is
/// bounded by the width of the tree rather than its size.
#[derive(Debug)]
pub struct SubtreeCounters<C> {
    pending: HashMap<u32, C>,
}

impl<C> Default for SubtreeCounters<C> {
    fn default() -> Self {
        Self {
            pending: HashMap::new(),
        }
    }
}

impl<C: Counter> SubtreeCounters<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh counter for `component` holding the sum of its children
    pub fn start(&mut self, tree: &ComponentTree, component: &Component) -> C {
        let mut counter = C::default();
        for child in tree.children(component) {
            if let Some(child_counter) = self.pending.remove(&child.reference()) {
                counter.aggregate(&child_counter);
            }
        }
        counter
    }

    /// Hand the finished counter of `component` over to its parent
    pub fn finish(&mut self, component: &Component, counter: C) {
        self.pending.insert(component.reference(), counter);
    }

    pub fn get(&self, component: &Component) -> Option<&C> {
        self.pending.get(&component.reference())
    }
}
