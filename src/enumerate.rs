//! Fixed-cardinality subset enumeration.
//!
//! [`generate`] walks the `C(n, k)` combinations directly by advancing an
//! index array, so a full sweep over `k = 1..=n` touches each nonempty
//! subset exactly once. [`scan`] is the population-count filter over all
//! `2^n` masks; it yields the same set in a different order and is kept as
//! a reference and for benchmarking.
use crate::subset::EdgeSubset;
use std::iter::FusedIterator;

/// Binomial coefficient `C(n, k)`; zero when `k > n`.
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k) as u64;
    let n = n as u64;
    // Each partial product is itself a binomial, so the division is exact.
    (0..k).fold(1u64, |acc, i| acc * (n - i) / (i + 1))
}

/// Every `k`-edge subset of an `n_edges` universe, in lexicographic order
/// of the sorted index lists: `[0,1]`, `[0,2]`, …, `[n-2,n-1]`.
///
/// The iterator is lazy and cloneable; calling `generate` again restarts
/// the sequence. `k == 0` yields the empty subset once and `k > n_edges`
/// yields nothing.
///
/// # Panics
///
/// Panics if `n_edges > EdgeSubset::MAX_EDGES`.
pub fn generate(n_edges: usize, k: usize) -> Combinations {
    assert!(
        n_edges <= EdgeSubset::MAX_EDGES,
        "universe of {n_edges} edges exceeds {}",
        EdgeSubset::MAX_EDGES
    );
    Combinations {
        n: n_edges,
        idx: (0..k).collect(),
        remaining: binomial(n_edges, k),
    }
}

/// Lazy k-combination generator returned by [`generate`].
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    idx: Vec<usize>,
    remaining: u64,
}

impl Combinations {
    /// Move `idx` to the next combination in lexicographic order.
    fn advance(&mut self) {
        let k = self.idx.len();
        // Rightmost position that can still move right.
        let Some(i) = (0..k).rev().find(|&i| self.idx[i] < self.n - k + i) else {
            return;
        };
        self.idx[i] += 1;
        for j in i + 1..k {
            self.idx[j] = self.idx[j - 1] + 1;
        }
    }
}

impl Iterator for Combinations {
    type Item = EdgeSubset;

    fn next(&mut self) -> Option<EdgeSubset> {
        if self.remaining == 0 {
            return None;
        }
        let current = EdgeSubset::from_indices(self.idx.iter().copied());
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Combinations {}
impl FusedIterator for Combinations {}

/// Every `k`-edge subset found by testing the population count of each of
/// the `2^n_edges` masks in ascending numeric order.
///
/// # Panics
///
/// Panics if `n_edges > EdgeSubset::MAX_EDGES`.
pub fn scan(n_edges: usize, k: usize) -> impl Iterator<Item = EdgeSubset> {
    assert!(
        n_edges <= EdgeSubset::MAX_EDGES,
        "universe of {n_edges} edges exceeds {}",
        EdgeSubset::MAX_EDGES
    );
    (0u64..1u64 << n_edges)
        .filter(move |m| m.count_ones() as usize == k)
        .map(|m| EdgeSubset::from_mask(m as u32))
}

/// Every nonempty subset, grouped by cardinality `1..=n_edges`.
pub fn all_nonempty(n_edges: usize) -> impl Iterator<Item = EdgeSubset> {
    (1..=n_edges).flat_map(move |k| generate(n_edges, k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binomial_values() {
        assert_eq!(binomial(20, 0), 1);
        assert_eq!(binomial(20, 1), 20);
        assert_eq!(binomial(20, 10), 184_756);
        assert_eq!(binomial(20, 20), 1);
        assert_eq!(binomial(5, 6), 0);
        let total: u64 = (0..=20).map(|k| binomial(20, k)).sum();
        assert_eq!(total, 1 << 20);
    }

    #[test]
    fn lexicographic_order() {
        let lists: Vec<Vec<usize>> = generate(4, 2).map(EdgeSubset::to_vec).collect();
        assert_eq!(
            lists,
            vec![vec![0, 1], vec![0, 2], vec![0, 3], vec![1, 2], vec![1, 3], vec![2, 3]]
        );
    }

    #[test]
    fn exact_size() {
        let mut it = generate(20, 3);
        assert_eq!(it.len(), 1140);
        it.next();
        assert_eq!(it.len(), 1139);
    }

    #[test]
    fn edge_cardinalities() {
        assert_eq!(generate(20, 0).collect::<Vec<_>>(), vec![EdgeSubset::empty()]);
        assert_eq!(generate(20, 20).collect::<Vec<_>>(), vec![EdgeSubset::full(20)]);
        assert_eq!(generate(20, 21).count(), 0);
    }

    #[test]
    fn restartable() {
        let first: Vec<_> = generate(10, 4).collect();
        let second: Vec<_> = generate(10, 4).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn fused_after_exhaustion() {
        let mut it = generate(3, 3);
        assert!(it.next().is_some());
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn scan_matches_generate_small() {
        for k in 0..=8 {
            let mut a: Vec<_> = generate(8, k).collect();
            let mut b: Vec<_> = scan(8, k).collect();
            a.sort();
            b.sort();
            assert_eq!(a, b, "k={k}");
        }
    }

    #[test]
    #[should_panic(expected = "exceeds 32")]
    fn scan_rejects_universe_wider_than_a_subset() {
        let _ = scan(34, 1);
    }

    #[test]
    #[should_panic(expected = "exceeds 32")]
    fn generate_rejects_universe_wider_than_a_subset() {
        let _ = generate(33, 1);
    }

    #[test]
    fn scan_accepts_full_width() {
        let first: Vec<Vec<usize>> = scan(32, 1).take(3).map(EdgeSubset::to_vec).collect();
        assert_eq!(first, vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn all_nonempty_covers_every_mask_once() {
        let mut masks: Vec<u32> = all_nonempty(10).map(EdgeSubset::mask).collect();
        masks.sort_unstable();
        let expected: Vec<u32> = (1..1u32 << 10).collect();
        assert_eq!(masks, expected);
    }
}
