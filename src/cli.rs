//! CLI entry point and argument dispatch
//!
//! Arguments are scanned rather than declaratively parsed: every recognized
//! flag and option is consumed from the vector in place, the mapping command
//! runs if requested, and whatever is still left afterwards is reported as
//! an unknown argument. Help does not short-circuit: `--help` prints usage
//! to stderr and the invocation then proceeds as normal.

use std::env;

use anyhow::Context;
use colored::Colorize;

use esmap::argv::ArgList;

use crate::commands;

/// Usage text printed on stderr for `--help`
const USAGE: &str = "\
esmap - rewrite the browser field of package.json to point at the ES module build

Usage: esmap --set-es-paths --include <glob> --es-folder <dir> [options]

Options:
      --set-es-paths              Rewrite the browser field from the included files
      --include <glob>            Files to map (repeatable; glob or literal path)
      --exclude <glob>            Files to drop from the set (repeatable)
      --es-folder <dir>           Folder holding the transpiled ES modules (required)
      --package-json-file <file>  Manifest to rewrite (default: ./package.json)
      --root-dir <dir>            Prefix stripped from target paths (default: current directory)
      --write                     Rewrite the manifest in place instead of printing it
      --verbose                   Enable debug logging
  -h, --help                      Print this help text";

/// Run the CLI over an argument vector, returning the process exit code.
///
/// Arguments left in the vector after the work completes are unknown: each
/// one is reported on stderr and the run fails, but work already delivered
/// is not rolled back.
#[must_use]
pub fn run(args: Vec<String>) -> i32 {
    let mut args = ArgList::new(args);

    if args.is_empty() {
        eprintln!("esmap v{}", esmap::VERSION);
        eprintln!("\nRun 'esmap --help' for usage");
        return 0;
    }

    if args.take_flag("--verbose") {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    // Help goes to stderr and leaves the rest of the invocation to run.
    if args.take_flag_any(&["--help", "-h"]) {
        eprintln!("{USAGE}");
    }

    if args.take_flag("--set-es-paths")
        && let Err(err) = dispatch(&mut args)
    {
        eprintln!("{} {err}", "error:".red().bold());
        return 1;
    }

    let leftover = args.into_remaining();
    if leftover.is_empty() {
        return 0;
    }
    for arg in &leftover {
        eprintln!("{} unknown argument: {arg}", "error:".red().bold());
    }
    1
}

/// Resolve the working directory and run the mapping command
fn dispatch(args: &mut ArgList) -> anyhow::Result<()> {
    let cwd = env::current_dir().context("cannot determine current working directory")?;
    commands::set_es_paths(args, &cwd)
}
