//! Search configuration.
//!
//! [`SearchConfig`] holds the tunable parameters of a feasibility run. The
//! defaults reproduce the reference artifact location.
use std::path::{Path, PathBuf};

/// Configuration for a full feasibility search.
///
/// All fields are `pub` so you can construct one with struct-update syntax:
///
/// ```
/// use exg_montage::SearchConfig;
///
/// let cfg = SearchConfig {
///     parallel: true,
///     ..SearchConfig::default()
/// };
/// assert!(cfg.output_dir.ends_with("feasible_channels"));
/// ```
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Directory receiving the artifact.
    ///
    /// Created (with parents) if missing. The file name inside it is fixed
    /// by the edge-universe size, see [`SearchConfig::artifact_path`].
    ///
    /// Default: `feasible_channels`.
    pub output_dir: PathBuf,

    /// Evaluate cardinalities on the rayon thread pool.
    ///
    /// The accepted set and its on-disk order are identical to a
    /// sequential run.
    ///
    /// Default: `false`.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("feasible_channels"),
            parallel: false,
        }
    }
}

impl SearchConfig {
    /// Configuration writing into `dir`, everything else default.
    pub fn with_output_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Artifact path for an `n_edges` universe.
    ///
    /// # Examples
    ///
    /// ```
    /// use exg_montage::SearchConfig;
    /// let cfg = SearchConfig::default();
    /// assert!(cfg.artifact_path(20).ends_with("feasible_20edges.json"));
    /// ```
    pub fn artifact_path(&self, n_edges: usize) -> PathBuf {
        self.output_dir.join(artifact_file_name(n_edges))
    }
}

/// `feasible_<n>edges.json`.
pub fn artifact_file_name(n_edges: usize) -> String {
    format!("feasible_{n_edges}edges.json")
}
