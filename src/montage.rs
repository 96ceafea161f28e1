//! The double banana bipolar montage.
//!
//! Twenty bipolar channels ("edges") over nineteen 10-20 electrodes, in the
//! canonical channel order used by the TUSZ seizure models:
//!
//! ```text
//!  0 FP1-F7   1 F7-T3   2 T3-T5   3 T5-O1      left temporal chain
//!  4 FP1-F3   5 F3-C3   6 C3-P3   7 P3-O1      left parasagittal chain
//!  8 FP2-F8   9 F8-T4  10 T4-T6  11 T6-O2      right temporal chain
//! 12 FP2-F4  13 F4-C4  14 C4-P4  15 P4-O2      right parasagittal chain
//! 16 Fz-Cz   17 Pz-Cz  18 C3-Cz  19 C4-Cz      central
//! ```
//!
//! The topology is fixed. [`Montage`] is built once and shared by reference.
use crate::subset::EdgeSubset;

/// Number of bipolar channels in the double banana montage.
pub const N_EDGES: usize = 20;

/// Number of distinct electrodes referenced by the montage.
pub const N_ELECTRODES: usize = 19;

/// Channel table: `DOUBLE_BANANA[i]` is the electrode pair of edge `i`.
pub const DOUBLE_BANANA: [(&str, &str); N_EDGES] = [
    ("FP1", "F7"),
    ("F7", "T3"),
    ("T3", "T5"),
    ("T5", "O1"),
    ("FP1", "F3"),
    ("F3", "C3"),
    ("C3", "P3"),
    ("P3", "O1"),
    ("FP2", "F8"),
    ("F8", "T4"),
    ("T4", "T6"),
    ("T6", "O2"),
    ("FP2", "F4"),
    ("F4", "C4"),
    ("C4", "P4"),
    ("P4", "O2"),
    ("Fz", "Cz"),
    ("Pz", "Cz"),
    ("C3", "Cz"),
    ("C4", "Cz"),
];

/// Electrode labels in first-appearance order of [`DOUBLE_BANANA`].
pub const ELECTRODES: [&str; N_ELECTRODES] = [
    "FP1", "F7", "T3", "T5", "O1", "F3", "C3", "P3", "FP2", "F8", "T4", "T6", "O2", "F4", "C4",
    "P4", "Fz", "Cz", "Pz",
];

/// One bipolar channel: the potential difference `first − second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Position in the canonical channel order.
    pub index: usize,
    /// Electrode index of the first (positive) lead.
    pub first: usize,
    /// Electrode index of the second (negative) lead.
    pub second: usize,
}

/// Immutable montage graph: ordered edges plus derived electrode set.
#[derive(Debug, Clone)]
pub struct Montage {
    electrodes: Vec<&'static str>,
    edges: Vec<Edge>,
    // Per electrode: mask of incident edges.
    incidence: Vec<EdgeSubset>,
}

impl Montage {
    /// The 20-channel double banana montage.
    pub fn double_banana() -> Self {
        Self::from_pairs(&DOUBLE_BANANA)
    }

    /// Electrodes are numbered in order of first appearance in `pairs`.
    fn from_pairs(pairs: &[(&'static str, &'static str)]) -> Self {
        debug_assert!(pairs.len() <= EdgeSubset::MAX_EDGES);

        let mut electrodes: Vec<&'static str> = Vec::new();
        let mut index_of = |label: &'static str| -> usize {
            match electrodes.iter().position(|&e| e == label) {
                Some(i) => i,
                None => {
                    electrodes.push(label);
                    electrodes.len() - 1
                }
            }
        };

        let edges: Vec<Edge> = pairs
            .iter()
            .enumerate()
            .map(|(index, &(a, b))| Edge { index, first: index_of(a), second: index_of(b) })
            .collect();

        let mut incidence = vec![EdgeSubset::empty(); electrodes.len()];
        for edge in &edges {
            incidence[edge.first].insert(edge.index);
            incidence[edge.second].insert(edge.index);
        }

        Self { electrodes, edges, incidence }
    }

    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn n_electrodes(&self) -> usize {
        self.electrodes.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn electrodes(&self) -> &[&'static str] {
        &self.electrodes
    }

    /// Edge `i`, or `None` if `i >= n_edges()`.
    pub fn edge(&self, i: usize) -> Option<&Edge> {
        self.edges.get(i)
    }

    /// Label of electrode `e`.
    pub fn electrode_label(&self, e: usize) -> &'static str {
        self.electrodes[e]
    }

    /// Case-insensitive electrode lookup (`"fp1"` matches `"FP1"`).
    pub fn electrode_index(&self, label: &str) -> Option<usize> {
        let label = label.trim();
        self.electrodes.iter().position(|e| e.eq_ignore_ascii_case(label))
    }

    /// Bipolar label of edge `i`, e.g. `"F7-T3"`.
    pub fn channel_label(&self, i: usize) -> Option<String> {
        self.edge(i).map(|e| {
            format!("{}-{}", self.electrodes[e.first], self.electrodes[e.second])
        })
    }

    /// Resolve a bipolar label such as `"F7-T3"` to its edge index.
    ///
    /// Matching ignores case and accepts either lead order, so `"t3-f7"`
    /// resolves to the same channel.
    pub fn edge_by_label(&self, label: &str) -> Option<usize> {
        let (a, b) = label.split_once('-')?;
        let a = self.electrode_index(a)?;
        let b = self.electrode_index(b)?;
        self.edges
            .iter()
            .find(|e| (e.first == a && e.second == b) || (e.first == b && e.second == a))
            .map(|e| e.index)
    }

    /// Edges touching electrode `e`.
    pub fn incident_edges(&self, e: usize) -> EdgeSubset {
        self.incidence[e]
    }

    /// Every edge of the montage selected.
    pub fn all_edges(&self) -> EdgeSubset {
        EdgeSubset::full(self.n_edges())
    }
}

impl Default for Montage {
    fn default() -> Self {
        Self::double_banana()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_banana_shape() {
        let m = Montage::double_banana();
        assert_eq!(m.n_edges(), N_EDGES);
        assert_eq!(m.n_electrodes(), N_ELECTRODES);
    }

    #[test]
    fn electrodes_follow_first_appearance() {
        let m = Montage::double_banana();
        assert_eq!(m.electrodes(), &ELECTRODES[..]);
    }

    #[test]
    fn edge_indices_are_positions() {
        let m = Montage::double_banana();
        for (i, e) in m.edges().iter().enumerate() {
            assert_eq!(e.index, i);
            assert_eq!(m.electrode_label(e.first), DOUBLE_BANANA[i].0);
            assert_eq!(m.electrode_label(e.second), DOUBLE_BANANA[i].1);
        }
    }

    #[test]
    fn channel_labels_round_trip() {
        let m = Montage::double_banana();
        assert_eq!(m.channel_label(1).as_deref(), Some("F7-T3"));
        assert_eq!(m.channel_label(20), None);
        for i in 0..m.n_edges() {
            let label = m.channel_label(i).unwrap();
            assert_eq!(m.edge_by_label(&label), Some(i));
        }
    }

    #[test]
    fn edge_lookup_ignores_case_and_orientation() {
        let m = Montage::double_banana();
        assert_eq!(m.edge_by_label("t3-f7"), Some(1));
        assert_eq!(m.edge_by_label("cz-C4"), Some(19));
        assert_eq!(m.edge_by_label("FP1-O1"), None);
        assert_eq!(m.edge_by_label("FP1"), None);
        assert_eq!(m.edge_by_label("A1-F7"), None);
    }

    #[test]
    fn cz_is_the_hub() {
        let m = Montage::double_banana();
        let cz = m.electrode_index("Cz").unwrap();
        let incident: Vec<usize> = m.incident_edges(cz).indices().collect();
        assert_eq!(incident, vec![16, 17, 18, 19]);
    }

    #[test]
    fn degrees_sum_to_twice_edges() {
        let m = Montage::double_banana();
        let total: usize = (0..m.n_electrodes())
            .map(|e| m.incident_edges(e).cardinality())
            .sum();
        assert_eq!(total, 2 * N_EDGES);
    }
}
