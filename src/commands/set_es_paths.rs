//! Rewrite the manifest's browser field from the resolved file set
//!
//! This is the tool's single operation. It consumes its options from the
//! scanned argument list, builds the file set, derives the mapping, replaces
//! the `browser` member and hands the updated manifest to the chosen sink.
//! Anything still left in the argument list afterwards belongs to the
//! caller's unknown-argument check.

use std::path::Path;

use anyhow::{Result, bail};
use colored::Colorize;
use log::debug;

use esmap::argv::ArgList;
use esmap::fileset::FileSet;
use esmap::manifest::Manifest;
use esmap::mapping::PathMapping;
use esmap::output::{self, Sink};

/// Rewrite the browser field of package.json.
///
/// Options consumed from `args`, all resolved against `cwd`:
///
/// - `--include <glob>` (repeatable) files going into the set
/// - `--exclude <glob>` (repeatable) files dropped from the set
/// - `--es-folder <dir>` (required) folder holding the transpiled modules
/// - `--package-json-file <file>` manifest to rewrite, default `cwd/package.json`
/// - `--root-dir <dir>` prefix stripped from targets, default `cwd`
/// - `--write` rewrite the file in place instead of printing to stdout
///
/// Unreadable mapped targets produce warnings on stderr but never fail the
/// run; the mapping is written regardless.
pub fn set_es_paths(args: &mut ArgList, cwd: &Path) -> Result<()> {
    let includes = args.take_paths("--include", cwd);
    let excludes = args.take_paths("--exclude", cwd);
    let es_folder = args.take_path("--es-folder", cwd);
    let manifest_path = args
        .take_path("--package-json-file", cwd)
        .unwrap_or_else(|| cwd.join("package.json"));
    let root_dir = args
        .take_path("--root-dir", cwd)
        .unwrap_or_else(|| cwd.to_path_buf());
    let sink = Sink::from_write_flag(args.take_flag("--write"));

    let Some(es_folder) = es_folder else {
        bail!("--es-folder is required");
    };

    let files = FileSet::build(&includes, &excludes)?;
    debug!("file set holds {} file(s)", files.len());

    let mut manifest = Manifest::load(&manifest_path)?;
    let mapping = PathMapping::build(&files, manifest.dir(), &es_folder, &root_dir)?;
    debug!("derived {} mapping entries", mapping.len());

    for failure in mapping.probe_targets() {
        debug!("probe failed for {}", failure.path.display());
        eprintln!(
            "{} cannot read mapped target {}: {}",
            "warning:".yellow().bold(),
            failure.target,
            failure.error
        );
    }

    manifest.set_browser(mapping.to_json());
    output::emit(&manifest, sink)?;

    Ok(())
}
