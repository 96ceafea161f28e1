//! Library error type.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The artifact for this edge-universe size was already produced.
    /// Never retried and never overwritten.
    #[error("feasible subset artifact already exists: {}", path.display())]
    ArtifactExists { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode feasible subsets: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to parse {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed artifact {}: {reason}", path.display())]
    MalformedArtifact { path: PathBuf, reason: String },

    #[error("edge index {index} out of range for a {n_edges}-edge montage")]
    EdgeOutOfRange { index: usize, n_edges: usize },

    #[error("edge index {index} does not fit a {max}-bit edge subset")]
    IndexTooWide { index: usize, max: usize },

    #[error("edge indices not strictly ascending at {at}")]
    UnsortedIndices { at: usize },

    #[error("unknown channel '{0}'")]
    UnknownChannel(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
