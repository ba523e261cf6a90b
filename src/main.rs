//! esmap - Rewrite the browser field of package.json to point at the ES
//! module build
//!
//! Bundlers use the browser field to swap module paths for alternates. This
//! binary maps every original module path in a project onto its transpiled
//! ES module equivalent, streaming the updated manifest to stdout or, with
//! `--write`, rewriting package.json in place.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;
mod commands;

/// Main entry point for the esmap CLI
fn main() {
    std::process::exit(cli::run(std::env::args().skip(1).collect()));
}
