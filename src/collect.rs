//! Exhaustive feasibility sweep.
//!
//! ```text
//! for k in 1..=n_edges
//!   generate(n_edges, k) ──▶ is_feasible ──▶ FeasibleSet
//! ```
//!
//! Subsets are recorded in canonical order (cardinality, then lexicographic
//! index list), which is exactly the enumeration order, so the set never
//! needs sorting after a sequential sweep.
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::enumerate::generate;
use crate::feasibility::is_feasible;
use crate::montage::Montage;
use crate::subset::EdgeSubset;

/// Ordered collection of distinct feasible subsets of one edge universe.
///
/// Serializes as a JSON array of ascending edge-index arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeasibleSet {
    subsets: Vec<EdgeSubset>,
}

impl FeasibleSet {
    pub fn new() -> Self {
        Self { subsets: Vec::new() }
    }

    pub fn from_subsets(subsets: Vec<EdgeSubset>) -> Self {
        Self { subsets }
    }

    pub fn len(&self) -> usize {
        self.subsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subsets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EdgeSubset> {
        self.subsets.iter()
    }

    pub fn as_slice(&self) -> &[EdgeSubset] {
        &self.subsets
    }

    /// Linear scan; the set is usually consumed, not queried.
    pub fn contains(&self, subset: EdgeSubset) -> bool {
        self.subsets.contains(&subset)
    }

    /// `counts[k]` = number of feasible subsets with `k` edges, for
    /// `k = 0..=n_edges`.
    pub fn counts_by_cardinality(&self, n_edges: usize) -> Vec<usize> {
        let mut counts = vec![0; n_edges + 1];
        for s in &self.subsets {
            if let Some(c) = counts.get_mut(s.cardinality()) {
                *c += 1;
            }
        }
        counts
    }

    /// Restore canonical order (cardinality, then lexicographic indices).
    pub fn normalize(&mut self) {
        self.subsets.sort_unstable();
    }

    /// The artifact's read contract: ascending index lists.
    pub fn to_index_lists(&self) -> Vec<Vec<usize>> {
        self.subsets.iter().map(|s| s.to_vec()).collect()
    }
}

impl Default for FeasibleSet {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a FeasibleSet {
    type Item = &'a EdgeSubset;
    type IntoIter = std::slice::Iter<'a, EdgeSubset>;

    fn into_iter(self) -> Self::IntoIter {
        self.subsets.iter()
    }
}

/// Feasible `k`-edge subsets, in generation order.
pub fn feasible_of_cardinality(montage: &Montage, k: usize) -> Vec<EdgeSubset> {
    generate(montage.n_edges(), k)
        .filter(|&s| is_feasible(montage, s))
        .collect()
}

/// Sequential sweep over `k = 1..=n_edges`.
pub fn collect_feasible(montage: &Montage) -> FeasibleSet {
    let mut set = FeasibleSet::new();
    for k in 1..=montage.n_edges() {
        let accepted = feasible_of_cardinality(montage, k);
        debug!(k, accepted = accepted.len(), "cardinality done");
        set.subsets.extend(accepted);
    }
    set
}

/// Parallel sweep: one rayon task per cardinality.
///
/// Produces the same set, in the same order, as [`collect_feasible`].
pub fn collect_feasible_parallel(montage: &Montage) -> FeasibleSet {
    let per_k: Vec<Vec<EdgeSubset>> = (1..=montage.n_edges())
        .into_par_iter()
        .map(|k| {
            let accepted = feasible_of_cardinality(montage, k);
            debug!(k, accepted = accepted.len(), "cardinality done");
            accepted
        })
        .collect();

    let mut set = FeasibleSet::from_subsets(per_k.into_iter().flatten().collect());
    set.normalize();
    set
}
