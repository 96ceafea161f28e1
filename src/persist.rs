//! Artifact I/O.
//!
//! The artifact is a JSON array of ascending edge-index arrays:
//!
//! ```text
//! [[0],[1],…,[19],[0,1],[0,4],…,[0,1,2,…,19]]
//! ```
//!
//! Writing is all-or-nothing and never clobbers: the payload goes to a
//! temporary file in the destination directory, which is then linked into
//! place with a no-replace rename. A concurrent writer that got there first
//! makes this fail with [`Error::ArtifactExists`] and the temporary file is
//! discarded.
use std::collections::HashSet;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::collect::FeasibleSet;
use crate::error::{Error, Result};
use crate::subset::EdgeSubset;

/// Fail with [`Error::ArtifactExists`] if `path` is already taken.
///
/// Run before the search so a doomed run costs nothing.
pub fn ensure_available(path: &Path) -> Result<()> {
    match path.try_exists() {
        Ok(false) => Ok(()),
        Ok(true) => {
            warn!(path = %path.display(), "refusing to overwrite existing artifact");
            Err(Error::ArtifactExists { path: path.to_path_buf() })
        }
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Write `set` to `path`, creating the parent directory if needed.
pub fn write_feasible_set(set: &FeasibleSet, path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "creating output directory");
        std::fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;
    {
        let mut w = BufWriter::new(tmp.as_file_mut());
        serde_json::to_writer(&mut w, set).map_err(Error::Encode)?;
        w.flush().map_err(|e| Error::io(path, e))?;
    }
    tmp.as_file().sync_all().map_err(|e| Error::io(path, e))?;

    tmp.persist_noclobber(path).map_err(|e| {
        if e.error.kind() == ErrorKind::AlreadyExists {
            warn!(path = %path.display(), "artifact appeared during the run; discarding result");
            Error::ArtifactExists { path: path.to_path_buf() }
        } else {
            Error::io(path, e.error)
        }
    })?;

    info!(path = %path.display(), subsets = set.len(), "wrote feasible subsets");
    Ok(())
}

/// Read an artifact back, validating it against an `n_edges` universe.
///
/// Rejects empty subsets, indices `>= n_edges`, lists that are not
/// strictly ascending, and repeated subsets. Order is preserved.
pub fn read_feasible_set(path: &Path, n_edges: usize) -> Result<FeasibleSet> {
    let file = std::fs::File::open(path).map_err(|e| Error::io(path, e))?;
    let set: FeasibleSet = serde_json::from_reader(BufReader::new(file))
        .map_err(|source| Error::Decode { path: path.to_path_buf(), source })?;

    let malformed = |reason: String| Error::MalformedArtifact { path: path.to_path_buf(), reason };
    let mut seen: HashSet<EdgeSubset> = HashSet::with_capacity(set.len());
    for (pos, &s) in set.iter().enumerate() {
        if s.is_empty() {
            return Err(malformed(format!("entry {pos} is empty")));
        }
        if !s.fits(n_edges) {
            return Err(malformed(format!(
                "entry {pos} {:?} references an edge >= {n_edges}",
                s
            )));
        }
        if !seen.insert(s) {
            return Err(malformed(format!("entry {pos} {:?} is a duplicate", s)));
        }
    }
    debug!(path = %path.display(), subsets = set.len(), "read feasible subsets");
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FeasibleSet {
        FeasibleSet::from_subsets(vec![
            EdgeSubset::from_indices([0]),
            EdgeSubset::from_indices([0, 1]),
            EdgeSubset::full(20),
        ])
    }

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feasible_20edges.json");
        write_feasible_set(&sample(), &path).unwrap();
        assert_eq!(read_feasible_set(&path, 20).unwrap(), sample());
    }

    #[test]
    fn no_temp_files_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_feasible_set(&sample(), &path).unwrap();
        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("out.json")]);
    }

    #[test]
    fn ensure_available_on_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("x.json");
        assert!(ensure_available(&path).is_ok());
    }

    #[test]
    fn read_rejects_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dup.json");
        std::fs::write(&path, "[[0,1],[2],[0,1]]").unwrap();
        let err = read_feasible_set(&path, 20).unwrap_err();
        assert!(matches!(err, Error::MalformedArtifact { .. }), "{err}");
    }

    #[test]
    fn read_rejects_out_of_universe() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("range.json");
        std::fs::write(&path, "[[0,20]]").unwrap();
        assert!(matches!(
            read_feasible_set(&path, 20),
            Err(Error::MalformedArtifact { .. })
        ));
    }

    #[test]
    fn read_rejects_empty_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        std::fs::write(&path, "[[]]").unwrap();
        assert!(matches!(
            read_feasible_set(&path, 20),
            Err(Error::MalformedArtifact { .. })
        ));
    }

    #[test]
    fn read_rejects_unsorted_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unsorted.json");
        std::fs::write(&path, "[[3,1]]").unwrap();
        assert!(matches!(read_feasible_set(&path, 20), Err(Error::Decode { .. })));
    }
}
