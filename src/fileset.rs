//! File set construction from include and exclude patterns
//!
//! The set is the union of all include expansions minus all exclude
//! expansions, keyed by absolute path. Patterns with glob metacharacters are
//! expanded against the filesystem; anything else is treated as a literal
//! path and inserted or removed without an existence check. Membership is a
//! true set: duplicates collapse, and iteration order is sorted so results
//! are deterministic regardless of pattern order.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

/// Errors that can occur while building the file set
#[derive(Debug, Error)]
pub enum FileSetError {
    /// An include or exclude pattern failed to parse
    #[error("invalid glob pattern {pattern}: {source}")]
    Pattern {
        /// The offending pattern, as resolved
        pattern: String,
        /// The parse failure reported by the glob engine
        source: glob::PatternError,
    },

    /// The filesystem walk behind a pattern failed
    #[error("glob expansion failed: {0}")]
    Glob(#[from] glob::GlobError),

    /// Include matches minus exclude matches left nothing to map
    #[error("the file set is empty: include patterns matched no files, or every match was excluded")]
    Empty,
}

/// The resolved set of files to map, keyed by absolute path
#[derive(Debug, Clone)]
pub struct FileSet {
    files: BTreeSet<PathBuf>,
}

impl FileSet {
    /// Build the set from already-resolved include and exclude patterns.
    ///
    /// An empty result is a fatal precondition violation
    /// ([`FileSetError::Empty`]), reported before the manifest is touched.
    pub fn build(includes: &[PathBuf], excludes: &[PathBuf]) -> Result<Self, FileSetError> {
        let mut files = BTreeSet::new();

        for pattern in includes {
            let matched = expand(pattern)?;
            debug!("include {} matched {} file(s)", pattern.display(), matched.len());
            files.extend(matched);
        }

        for pattern in excludes {
            let matched = expand(pattern)?;
            debug!("exclude {} matched {} file(s)", pattern.display(), matched.len());
            for path in &matched {
                files.remove(path);
            }
        }

        if files.is_empty() {
            return Err(FileSetError::Empty);
        }
        Ok(Self { files })
    }

    /// Iterate the files in sorted order
    pub fn files(&self) -> impl Iterator<Item = &PathBuf> {
        self.files.iter()
    }

    /// Whether `path` is a member of the set
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.files.contains(path)
    }

    /// Number of files in the set (never zero after a successful build)
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Expand one resolved pattern: glob when it carries metacharacters,
/// literal path otherwise.
fn expand(pattern: &Path) -> Result<Vec<PathBuf>, FileSetError> {
    let pattern = pattern.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(vec![PathBuf::from(pattern.as_ref())]);
    }

    let paths = glob::glob(&pattern).map_err(|source| FileSetError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut out = Vec::new();
    for entry in paths {
        out.push(entry?);
    }
    Ok(out)
}

/// Check if a string contains glob metacharacters
#[must_use]
pub fn is_glob_pattern(s: &str) -> bool {
    s.contains('*') || s.contains('?') || s.contains('[')
}
