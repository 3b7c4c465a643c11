//! Symmetric record of node pairs that already carry an edge.

use std::collections::{HashSet, TryReserveError};

use crate::edge::{NodeId, canonical_pair};

/// Set of unordered node pairs consumed during one generation run.
///
/// Pairs are stored in canonical `(smaller, larger)` order so `(a, b)` and
/// `(b, a)` resolve to the same entry.
#[derive(Clone, Debug, Default)]
pub(crate) struct UsedPairs {
    pairs: HashSet<(NodeId, NodeId)>,
}

impl UsedPairs {
    /// Reserves room for `capacity` pairs, failing instead of aborting when
    /// the allocation is impossible.
    pub(crate) fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        let mut pairs = HashSet::new();
        pairs.try_reserve(capacity)?;
        Ok(Self { pairs })
    }

    pub(crate) fn contains(&self, left: NodeId, right: NodeId) -> bool {
        self.pairs.contains(&canonical_pair(left, right))
    }

    /// Marks the pair as used, returning `false` if it already was.
    pub(crate) fn insert(&mut self, left: NodeId, right: NodeId) -> bool {
        self.pairs.insert(canonical_pair(left, right))
    }

    /// A candidate is acceptable when it is neither a self-loop nor a
    /// previously used pair.
    pub(crate) fn accepts(&self, left: NodeId, right: NodeId) -> bool {
        left != right && !self.contains(left, right)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.pairs.len()
    }
}
