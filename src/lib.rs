//! # exg-montage: reduced-channel layouts of the double banana montage
//!
//! A lower-channel-count EEG wearable keeps some of the 20 bipolar channels
//! of the standard double banana montage and drops the rest. Not every
//! choice is honest: if a dropped channel's two electrodes are both still
//! on the scalp through other kept channels, the device records that
//! channel anyway. `exg-montage` enumerates every nonempty channel subset,
//! keeps the structurally consistent ones and writes them to a JSON
//! artifact that training pipelines read to pick reduced montages.
//!
//! ## Pipeline overview
//!
//! ```text
//! Montage::double_banana()     20 edges over 19 electrodes (fixed)
//!   │
//!   ├─ persist::ensure_available   refuse early if the artifact exists
//!   ├─ enumerate::generate(20, k)  k = 1..=20, C(20, k) subsets each
//!   ├─ feasibility::is_feasible    no dropped edge between used electrodes
//!   ├─ collect::FeasibleSet        accepted subsets, canonical order
//!   └─ persist::write_feasible_set <output_dir>/feasible_20edges.json
//! ```
//!
//! ## Quick start
//!
//! ```no_run
//! use exg_montage::{run, Montage, SearchConfig};
//!
//! let montage = Montage::double_banana();
//! let summary = run(&montage, &SearchConfig::default()).unwrap();
//! println!("{} feasible subsets → {}", summary.total, summary.path.display());
//! ```
//!
//! ## Checking one layout
//!
//! ```
//! use exg_montage::{is_feasible, violations, EdgeSubset, Montage};
//!
//! let m = Montage::double_banana();
//! // FP1-F7 + F7-T3: a contiguous chain.
//! assert!(is_feasible(&m, EdgeSubset::from_indices([0, 1])));
//! // FP1-F7 + T3-T5 without F7-T3.
//! let gap = EdgeSubset::from_indices([0, 2]);
//! assert!(!is_feasible(&m, gap));
//! assert_eq!(violations(&m, gap), vec![1]);
//! ```

pub mod collect;
pub mod config;
pub mod enumerate;
pub mod error;
pub mod feasibility;
pub mod logging;
pub mod montage;
pub mod persist;
pub mod subset;

use std::path::PathBuf;
use tracing::info;

// ── Crate-root re-exports ─────────────────────────────────────────────────

pub use collect::{
    collect_feasible, collect_feasible_parallel, feasible_of_cardinality, FeasibleSet,
};
pub use config::{artifact_file_name, SearchConfig};
pub use enumerate::{all_nonempty, binomial, generate, scan, Combinations};
pub use error::{Error, Result};
pub use feasibility::{is_feasible, violations, DegreeMap};
pub use montage::{Edge, Montage, DOUBLE_BANANA, ELECTRODES, N_EDGES, N_ELECTRODES};
pub use persist::{ensure_available, read_feasible_set, write_feasible_set};
pub use subset::EdgeSubset;

/// Outcome of a completed [`run`].
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Artifact written.
    pub path: PathBuf,
    /// Number of feasible subsets.
    pub total: usize,
    /// `per_cardinality[k]` = feasible subsets with `k` edges.
    pub per_cardinality: Vec<usize>,
}

/// Run the **full feasibility search** and persist the result.
///
/// 1. Resolve the artifact path from [`SearchConfig::artifact_path`] and
///    fail with [`Error::ArtifactExists`] if it is taken, before any
///    enumeration happens.
/// 2. Sweep `k = 1..=n_edges`, sequentially or on the rayon pool per
///    [`SearchConfig::parallel`].
/// 3. Log the accepted total.
/// 4. Write the artifact, creating the output directory if needed.
///
/// # Errors
///
/// * [`Error::ArtifactExists`]: the artifact exists, either at start or
///   because it appeared while the search ran. The existing file is left
///   untouched.
/// * [`Error::Io`] / [`Error::Encode`]: the write failed; no artifact is
///   left behind.
pub fn run(montage: &Montage, cfg: &SearchConfig) -> Result<RunSummary> {
    let n_edges = montage.n_edges();
    let path = cfg.artifact_path(n_edges);
    ensure_available(&path)?;

    info!(
        n_edges,
        n_electrodes = montage.n_electrodes(),
        parallel = cfg.parallel,
        "searching feasible subsets"
    );
    let set = if cfg.parallel {
        collect_feasible_parallel(montage)
    } else {
        collect_feasible(montage)
    };
    info!(total = set.len(), "total feasible combinations");

    write_feasible_set(&set, &path)?;

    Ok(RunSummary {
        path,
        total: set.len(),
        per_cardinality: set.counts_by_cardinality(n_edges),
    })
}
