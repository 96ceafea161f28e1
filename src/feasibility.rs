//! Structural feasibility of a reduced channel set.
//!
//! A subset is infeasible when some channel it drops joins two electrodes
//! that are both still wired through kept channels. Such a layout already
//! places both leads of the dropped channel on the scalp, so the wearable
//! would record that channel implicitly and cannot claim to omit it.
//!
//! Example: keeping `FP1-F7` and `T3-T5` but dropping `F7-T3` is
//! infeasible, since F7 and T3 are both in use.
use crate::montage::Montage;
use crate::subset::EdgeSubset;

/// Per-electrode count of selected incident edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegreeMap {
    degrees: Vec<usize>,
}

impl DegreeMap {
    pub fn compute(montage: &Montage, subset: EdgeSubset) -> Self {
        let mut degrees = vec![0; montage.n_electrodes()];
        for i in subset.indices() {
            if let Some(edge) = montage.edge(i) {
                degrees[edge.first] += 1;
                degrees[edge.second] += 1;
            }
        }
        Self { degrees }
    }

    /// Degree of electrode `e`.
    pub fn degree(&self, e: usize) -> usize {
        self.degrees[e]
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.degrees
    }

    /// Electrodes with degree ≥ 1.
    pub fn touched(&self) -> impl Iterator<Item = usize> + '_ {
        self.degrees.iter().enumerate().filter(|&(_, &d)| d > 0).map(|(e, _)| e)
    }
}

/// Bitmask of electrodes with at least one selected incident edge.
fn touched_electrodes(montage: &Montage, subset: EdgeSubset) -> u64 {
    subset
        .indices()
        .filter_map(|i| montage.edge(i))
        .fold(0u64, |acc, e| acc | (1 << e.first) | (1 << e.second))
}

/// `true` when no unselected edge has both endpoints touched by the
/// selection. Stops at the first violation.
///
/// The full edge set has nothing unselected and is always feasible.
pub fn is_feasible(montage: &Montage, subset: EdgeSubset) -> bool {
    debug_assert!(montage.n_electrodes() <= 64);
    let touched = touched_electrodes(montage, subset);
    subset
        .complement(montage.n_edges())
        .indices()
        .filter_map(|i| montage.edge(i))
        .all(|e| touched & (1 << e.first) == 0 || touched & (1 << e.second) == 0)
}

/// Every unselected edge whose endpoints are both touched, ascending.
/// Empty exactly when [`is_feasible`] holds.
pub fn violations(montage: &Montage, subset: EdgeSubset) -> Vec<usize> {
    let degrees = DegreeMap::compute(montage, subset);
    montage
        .edges()
        .iter()
        .filter(|e| !subset.contains(e.index))
        .filter(|e| degrees.degree(e.first) >= 1 && degrees.degree(e.second) >= 1)
        .map(|e| e.index)
        .collect()
}
