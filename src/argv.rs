//! In-place argument vector scanning
//!
//! Flags are consumed from an owned, mutable argument list: every lookup
//! removes the tokens it matched, so no token is ever matched twice and
//! whatever is left at the end is, by construction, unrecognized. Value
//! flags treat a following token that starts with `-` as a missing value
//! (the flag name is still consumed, the suspect token stays in place).
//!
//! # Examples
//!
//! ```
//! use esmap::argv::ArgList;
//!
//! let mut args = ArgList::new(vec!["--es-folder".into(), "./es".into(), "--write".into()]);
//! assert_eq!(args.take_value("--es-folder").as_deref(), Some("./es"));
//! assert!(args.take_flag("--write"));
//! assert!(args.is_empty());
//! ```

use std::path::{Path, PathBuf};

use crate::paths;

/// An owned argument vector that recognized flags are consumed from
#[derive(Debug, Clone)]
pub struct ArgList {
    args: Vec<String>,
}

impl ArgList {
    /// Wrap a raw argument vector (program name already stripped)
    #[must_use]
    pub const fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    /// Extract a single-valued string flag.
    ///
    /// Finds the first token equal to `name` and removes it. If the token
    /// after it is missing or begins with `-`, the value is considered
    /// malformed: `None` is returned and the suspect token is left in the
    /// list. Returns `None` untouched when the flag is absent.
    pub fn take_value(&mut self, name: &str) -> Option<String> {
        let index = self.args.iter().position(|arg| arg == name)?;
        self.args.remove(index);
        match self.args.get(index) {
            Some(value) if !value.starts_with('-') => Some(self.args.remove(index)),
            _ => None,
        }
    }

    /// Extract a single-valued path flag, resolved against `base` when
    /// relative. Absent flags stay `None`.
    pub fn take_path(&mut self, name: &str, base: &Path) -> Option<PathBuf> {
        self.take_value(name).map(|value| paths::absolutize(&value, base))
    }

    /// Extract every occurrence of a repeatable path flag, in argv order.
    ///
    /// Scans until the flag is no longer found; a malformed occurrence ends
    /// the scan with whatever was accumulated so far.
    pub fn take_paths(&mut self, name: &str, base: &Path) -> Vec<PathBuf> {
        let mut out = Vec::new();
        while let Some(path) = self.take_path(name, base) {
            out.push(path);
        }
        out
    }

    /// Detect a presence-only flag, removing every occurrence.
    pub fn take_flag(&mut self, name: &str) -> bool {
        let before = self.args.len();
        self.args.retain(|arg| arg != name);
        before != self.args.len()
    }

    /// Detect a presence-only flag under any of its spellings.
    ///
    /// All spellings are consumed, so `--help -h` leaves no residue.
    pub fn take_flag_any(&mut self, names: &[&str]) -> bool {
        let mut found = false;
        for name in names {
            found |= self.take_flag(name);
        }
        found
    }

    /// Tokens no lookup has claimed
    #[must_use]
    pub fn remaining(&self) -> &[String] {
        &self.args
    }

    /// Consume the list, yielding the unclaimed tokens
    #[must_use]
    pub fn into_remaining(self) -> Vec<String> {
        self.args
    }

    /// Number of unclaimed tokens
    #[must_use]
    pub const fn len(&self) -> usize {
        self.args.len()
    }

    /// Whether every token has been claimed
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}
