//! Loading, mutation and rendering of package.json
//!
//! The manifest is held as an ordered JSON object so a rewrite only touches
//! the `browser` member: every other member keeps its position, and a
//! replaced `browser` keeps its original slot. Rendering always uses
//! two-space indentation and reproduces the presence or absence of the
//! file's trailing newline.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

/// Errors that can occur while loading or rewriting the manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be read
    #[error("cannot read manifest {}: {source}", path.display())]
    Read {
        /// Path of the manifest
        path: PathBuf,
        /// The underlying I/O failure
        source: io::Error,
    },

    /// The manifest is not valid JSON
    #[error("cannot parse manifest {}: {source}", path.display())]
    Parse {
        /// Path of the manifest
        path: PathBuf,
        /// The parse failure, including line and column
        source: serde_json::Error,
    },

    /// The manifest parses, but its top level is not a JSON object
    #[error("manifest {} does not contain a top-level JSON object", path.display())]
    NotAnObject {
        /// Path of the manifest
        path: PathBuf,
    },

    /// The updated manifest could not be serialized
    #[error("cannot serialize manifest: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The updated manifest could not be written back
    #[error("cannot write manifest {}: {source}", path.display())]
    Write {
        /// Path of the manifest
        path: PathBuf,
        /// The underlying I/O failure
        source: io::Error,
    },
}

/// An in-memory package.json, ready to take a new browser field
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    dir: PathBuf,
    document: Map<String, Value>,
    had_trailing_newline: bool,
}

impl Manifest {
    /// Read and parse the manifest at `path`.
    ///
    /// Fails when the file cannot be read, is not valid JSON, or does not
    /// hold a JSON object at the top level.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let had_trailing_newline = content.ends_with('\n');

        let value: Value = serde_json::from_str(&content).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let Value::Object(document) = value else {
            return Err(ManifestError::NotAnObject {
                path: path.to_path_buf(),
            });
        };

        let dir = path
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);

        Ok(Self {
            path: path.to_path_buf(),
            dir,
            document,
            had_trailing_newline,
        })
    }

    /// Replace the `browser` member wholesale.
    ///
    /// An existing member keeps its position in the document; a new one is
    /// appended after the last member.
    pub fn set_browser(&mut self, value: Value) {
        self.document.insert("browser".to_string(), value);
    }

    /// Render the document with two-space indentation, reproducing the
    /// original trailing-newline state.
    pub fn render(&self) -> Result<String, ManifestError> {
        let mut out =
            serde_json::to_string_pretty(&self.document).map_err(ManifestError::Serialize)?;
        if self.had_trailing_newline {
            out.push('\n');
        }
        Ok(out)
    }

    /// Render and write the document back to the file it was loaded from
    pub fn write(&self) -> Result<(), ManifestError> {
        let rendered = self.render()?;
        fs::write(&self.path, rendered).map_err(|source| ManifestError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Path the manifest was loaded from
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory containing the manifest, the base for source specifiers
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Whether the file ended with a newline when loaded
    #[must_use]
    pub const fn had_trailing_newline(&self) -> bool {
        self.had_trailing_newline
    }

    /// Look up a top-level member
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.document.get(key)
    }
}
