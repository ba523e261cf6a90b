//! Centralized path arithmetic for esmap
//!
//! This module is the single source of truth for how user-supplied paths are
//! resolved and how manifest specifiers are derived from them.
//!
//! ## Resolution
//!
//! Every path argument is resolved against the invocation's working
//! directory before any I/O happens, then lexically normalized: `.` segments
//! are removed and `..` segments fold onto their parent without consulting
//! the filesystem (symlinks are never resolved).
//!
//! ## Specifiers
//!
//! Manifest specifiers are always `/`-separated and `./`-prefixed, the form
//! bundlers expect in the `browser` field:
//!
//! ```text
//! /project/src/index.js  relative to  /project       ->  ./src/index.js
//! /project/lib/util.js   relative to  /project/dist  ->  ./../lib/util.js
//! ```
//!
//! A file outside the base directory legitimately relativizes to a
//! `..`-prefixed path; that result is preserved verbatim, never rejected.

use std::path::{Component, Path, PathBuf};

/// Resolve a user-supplied path argument to an absolute, normalized path.
///
/// Relative inputs are joined onto `base` (the caller passes the process's
/// current working directory); absolute inputs are normalized only.
#[must_use]
pub fn absolutize(value: &str, base: &Path) -> PathBuf {
    let path = Path::new(value);
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&base.join(path))
    }
}

/// Lexically normalize a path: drop `.` segments and fold `..` segments.
///
/// `..` never pops past the root of an absolute path; on a relative path,
/// unmatched `..` segments are kept at the front.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {},
            Component::ParentDir => {
                let ends_normal =
                    matches!(out.components().next_back(), Some(Component::Normal(_)));
                if ends_normal {
                    out.pop();
                } else if path.is_relative() {
                    out.push("..");
                }
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Compute the path of `path` relative to `base`, both absolute.
///
/// Purely lexical: shared leading components are stripped, and one `..`
/// segment is emitted for every remaining component of `base`. A `path`
/// outside `base` therefore yields a `..`-prefixed result.
#[must_use]
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let path_components: Vec<Component<'_>> = path.components().collect();
    let base_components: Vec<Component<'_>> = base.components().collect();

    let shared = path_components
        .iter()
        .zip(&base_components)
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = PathBuf::new();
    for _ in shared..base_components.len() {
        out.push("..");
    }
    for component in &path_components[shared..] {
        out.push(component.as_os_str());
    }
    out
}

/// Render a relative path as a `./`-prefixed, `/`-separated specifier.
#[must_use]
pub fn dot_specifier(path: &Path) -> String {
    let mut out = String::from(".");
    for component in path.components() {
        match component {
            Component::ParentDir => out.push_str("/.."),
            Component::Normal(name) => {
                out.push('/');
                out.push_str(&name.to_string_lossy());
            },
            Component::RootDir | Component::CurDir | Component::Prefix(_) => {},
        }
    }
    out
}
