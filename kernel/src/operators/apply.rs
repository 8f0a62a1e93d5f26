//! Successor enumeration: the transition generator over a rule catalogue.
//!
//! [`Successors`] is a lazy, finite, non-restartable iterator. It walks the
//! catalogue once in order and yields one [`Transition`] per rule whose
//! precondition holds on the source state. It keeps no search bookkeeping:
//! the output depends only on the source state and the catalogue.

use std::iter::FusedIterator;
use std::slice;
use std::sync::Arc;

use crate::carrier::inventory::InventoryStateV1;
use crate::operators::cost::Cost;
use crate::operators::rule::CompiledRule;

/// One applicable rule and the state it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Name of the rule that was applied.
    pub action: Arc<str>,
    /// The resulting state.
    pub state: InventoryStateV1,
    /// Cost of the rule.
    pub cost: Cost,
}

/// Iterator returned by [`crate::operators::catalogue::RuleCatalogueV1::successors`].
#[derive(Debug)]
pub struct Successors<'a> {
    rules: slice::Iter<'a, CompiledRule>,
    source: &'a InventoryStateV1,
}

impl<'a> Successors<'a> {
    pub(crate) fn new(rules: &'a [CompiledRule], source: &'a InventoryStateV1) -> Self {
        Self {
            rules: rules.iter(),
            source,
        }
    }
}

impl Iterator for Successors<'_> {
    type Item = Transition;

    fn next(&mut self) -> Option<Transition> {
        let source = self.source;
        self.rules.find_map(|rule| {
            rule.apply(source).map(|state| Transition {
                action: rule.shared_name(),
                state,
                cost: rule.cost(),
            })
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.rules.size_hint().1)
    }
}

impl FusedIterator for Successors<'_> {}
