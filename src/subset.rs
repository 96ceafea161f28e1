//! Edge selections as bitmasks.
//!
//! Bit `i` of an [`EdgeSubset`] is set when channel `i` is kept. The
//! equivalent boolean vector is available via [`EdgeSubset::to_flags`].
//!
//! On disk a subset is the ascending list of its edge indices, so
//! `{0, 1}` serializes as `[0,1]`.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Error;

/// A selection over at most [`EdgeSubset::MAX_EDGES`] edges.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<usize>", try_from = "Vec<usize>")]
pub struct EdgeSubset(u32);

impl EdgeSubset {
    /// Widest edge universe a subset can describe.
    pub const MAX_EDGES: usize = 32;

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn from_mask(mask: u32) -> Self {
        Self(mask)
    }

    /// All of the first `n_edges` edges selected.
    pub const fn full(n_edges: usize) -> Self {
        if n_edges >= Self::MAX_EDGES {
            Self(u32::MAX)
        } else {
            Self((1u32 << n_edges) - 1)
        }
    }

    /// Build a subset from edge indices. Duplicates are harmless.
    ///
    /// # Panics
    ///
    /// Panics if any index is `>= MAX_EDGES`.
    pub fn from_indices<I: IntoIterator<Item = usize>>(indices: I) -> Self {
        let mut s = Self::empty();
        for i in indices {
            s.insert(i);
        }
        s
    }

    /// Build a subset from a selection vector (`flags[i]` ⇔ edge `i`).
    pub fn from_flags(flags: &[bool]) -> Self {
        Self::from_indices(flags.iter().enumerate().filter(|&(_, &f)| f).map(|(i, _)| i))
    }

    pub const fn mask(self) -> u32 {
        self.0
    }

    /// Number of selected edges.
    pub const fn cardinality(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, i: usize) -> bool {
        i < Self::MAX_EDGES && self.0 & (1 << i) != 0
    }

    /// True when every selected edge index is `< n_edges`.
    pub const fn fits(self, n_edges: usize) -> bool {
        self.0 & !Self::full(n_edges).0 == 0
    }

    pub fn insert(&mut self, i: usize) {
        assert!(i < Self::MAX_EDGES, "edge index {i} exceeds {}", Self::MAX_EDGES);
        self.0 |= 1 << i;
    }

    /// Edges of the first `n_edges` not in `self`.
    pub const fn complement(self, n_edges: usize) -> Self {
        Self(!self.0 & Self::full(n_edges).0)
    }

    /// Selected edge indices, ascending.
    pub fn indices(self) -> Indices {
        Indices(self.0)
    }

    /// Selection vector of length `n_edges`.
    pub fn to_flags(self, n_edges: usize) -> Vec<bool> {
        (0..n_edges).map(|i| self.contains(i)).collect()
    }

    /// Ascending index list, the on-disk form.
    pub fn to_vec(self) -> Vec<usize> {
        self.indices().collect()
    }
}

impl fmt::Debug for EdgeSubset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.indices()).finish()
    }
}

/// Canonical order: smaller subsets first, then lexicographic by index list.
impl Ord for EdgeSubset {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cardinality()
            .cmp(&other.cardinality())
            .then_with(|| self.indices().cmp(other.indices()))
    }
}

impl PartialOrd for EdgeSubset {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl FromIterator<usize> for EdgeSubset {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::from_indices(iter)
    }
}

/// Iterator over the set bits of a subset, lowest first.
#[derive(Debug, Clone)]
pub struct Indices(u32);

impl Iterator for Indices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.0 == 0 {
            return None;
        }
        let i = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(i)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Indices {}

impl From<EdgeSubset> for Vec<usize> {
    fn from(s: EdgeSubset) -> Self {
        s.to_vec()
    }
}

/// Accepts strictly ascending index lists only, the form written to disk.
impl TryFrom<Vec<usize>> for EdgeSubset {
    type Error = Error;

    fn try_from(indices: Vec<usize>) -> Result<Self, Error> {
        if let Some(&index) = indices.iter().find(|&&i| i >= Self::MAX_EDGES) {
            return Err(Error::IndexTooWide { index, max: Self::MAX_EDGES });
        }
        if let Some(w) = indices.windows(2).find(|w| w[0] >= w[1]) {
            return Err(Error::UnsortedIndices { at: w[1] });
        }
        Ok(Self::from_indices(indices))
    }
}
