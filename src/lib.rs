//! esmap - rewrite the `browser` field of a package manifest
//!
//! This library provides the building blocks of the `esmap` CLI: an in-place
//! argument-vector scanner, glob-based file set construction, path mapping
//! arithmetic, and a JSON manifest rewriter that preserves key order and the
//! trailing newline of the original file.

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

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod argv;
pub mod fileset;
pub mod manifest;
pub mod mapping;
pub mod output;
pub mod paths;
