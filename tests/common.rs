/// Shared helpers for the integration tests.
use exg_montage::{EdgeSubset, DOUBLE_BANANA};
use std::collections::HashMap;
use std::path::PathBuf;

#[allow(unused)]
pub const N: usize = 20;

#[allow(unused)]
/// Every mask of the 20-edge universe, empty set included.
pub fn all_masks() -> impl Iterator<Item = EdgeSubset> {
    (0u32..1 << N).map(EdgeSubset::from_mask)
}

#[allow(unused)]
/// Label-keyed restatement of the feasibility rule, independent of the
/// crate's electrode numbering: build degrees by name, then reject if any
/// zero-weight channel has both leads at degree ≥ 1.
pub fn reference_feasible(subset: EdgeSubset) -> bool {
    let mut degrees: HashMap<&str, usize> = HashMap::new();
    for (a, b) in DOUBLE_BANANA {
        degrees.entry(a).or_insert(0);
        degrees.entry(b).or_insert(0);
    }
    for i in subset.indices() {
        let (a, b) = DOUBLE_BANANA[i];
        *degrees.get_mut(a).unwrap() += 1;
        *degrees.get_mut(b).unwrap() += 1;
    }
    let flags = subset.to_flags(N);
    !flags
        .iter()
        .enumerate()
        .any(|(i, &w)| !w && degrees[DOUBLE_BANANA[i].0] >= 1 && degrees[DOUBLE_BANANA[i].1] >= 1)
}

#[allow(unused)]
/// Fresh scratch directory, removed on drop.
pub fn scratch() -> tempfile::TempDir {
    tempfile::tempdir().expect("create scratch dir")
}

#[allow(unused)]
pub fn artifact_in(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("feasible_channels").join("feasible_20edges.json")
}
