//! Derivation of the browser-field mapping from the file set
//!
//! Every file in the set yields one entry. The entry's source specifier is
//! the file's path relative to the manifest directory; its target specifier
//! points at the same relative layout under the ES output folder's final
//! path component, with the root directory stripped first:
//!
//! ```text
//! file      /proj/src/sub/mod.js
//! manifest  /proj/package.json      ->  source "./src/sub/mod.js"
//! es folder /proj/dist-es
//! root dir  /proj                   ->  target "./dist-es/src/sub/mod.js"
//! ```
//!
//! Both specifiers are `./`-prefixed and `/`-separated regardless of
//! platform. Target existence is advisory only: [`PathMapping::probe_targets`]
//! reports unreadable targets but never fails the run.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use serde_json::Value;
use thiserror::Error;

use crate::fileset::FileSet;
use crate::paths;

/// Errors that can occur while deriving the mapping
#[derive(Debug, Error)]
pub enum MappingError {
    /// The ES output folder has no final path component to name targets with
    #[error("cannot derive a folder name from es path {}", path.display())]
    EsFolderBasename {
        /// The folder argument, as resolved
        path: PathBuf,
    },
}

/// One source-to-target pair in the browser field
#[derive(Debug, Clone)]
pub struct MappingEntry {
    /// Specifier for the original file, relative to the manifest directory
    pub source: String,
    /// Specifier for the transpiled file under the ES output folder
    pub target: String,
    /// Absolute path the target specifier resolves to, used for probing
    pub target_path: PathBuf,
}

/// The complete mapping destined for the manifest's browser field
#[derive(Debug, Clone)]
pub struct PathMapping {
    entries: Vec<MappingEntry>,
}

impl PathMapping {
    /// Derive one entry per file in the set.
    ///
    /// `manifest_dir`, `es_folder` and `root_dir` must already be absolute.
    /// Files outside the manifest directory or the root directory keep their
    /// `..` components verbatim in the specifiers.
    pub fn build(
        files: &FileSet,
        manifest_dir: &Path,
        es_folder: &Path,
        root_dir: &Path,
    ) -> Result<Self, MappingError> {
        let es_basename = es_folder
            .file_name()
            .ok_or_else(|| MappingError::EsFolderBasename {
                path: es_folder.to_path_buf(),
            })?;

        let mut entries = Vec::with_capacity(files.len());
        for file in files.files() {
            let source = paths::dot_specifier(&paths::relative_to(file, manifest_dir));
            let target_rel = PathBuf::from(es_basename).join(paths::relative_to(file, root_dir));
            let target = paths::dot_specifier(&target_rel);
            let target_path = manifest_dir.join(&target_rel);
            debug!("mapping {source} -> {target}");
            entries.push(MappingEntry {
                source,
                target,
                target_path,
            });
        }

        Ok(Self { entries })
    }

    /// The entries in file-set order
    #[must_use]
    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    /// Number of entries
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping has no entries
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the mapping as the JSON object stored under `browser`
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut map = serde_json::Map::new();
        for entry in &self.entries {
            map.insert(entry.source.clone(), Value::String(entry.target.clone()));
        }
        Value::Object(map)
    }

    /// Try to open every target path, collecting the failures.
    ///
    /// One unreadable target does not stop the probe of the rest, and the
    /// caller treats the report as advisory.
    #[must_use]
    pub fn probe_targets(&self) -> Vec<ProbeFailure> {
        let mut failures = Vec::new();
        for entry in &self.entries {
            if let Err(error) = fs::File::open(&entry.target_path) {
                failures.push(ProbeFailure {
                    target: entry.target.clone(),
                    path: entry.target_path.clone(),
                    error,
                });
            }
        }
        failures
    }
}

/// A mapped target whose file could not be opened
#[derive(Debug)]
pub struct ProbeFailure {
    /// The target specifier as written into the browser field
    pub target: String,
    /// The absolute path that was probed
    pub path: PathBuf,
    /// The underlying I/O failure
    pub error: io::Error,
}
