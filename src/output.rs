//! Delivery of the updated manifest
//!
//! Two sinks exist: rewrite the manifest file in place, or stream the
//! rendered document to stdout. Streaming is the default and keeps stdout
//! clean enough to pipe: the rendered manifest is the only thing written
//! there, while the reminder that the file was left untouched goes to
//! stderr.

use colored::Colorize;

use crate::manifest::{Manifest, ManifestError};

/// Where the updated manifest goes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Sink {
    /// Rewrite the manifest file in place
    Write,
    /// Print the rendered manifest to stdout, leaving the file untouched
    #[default]
    Stream,
}

impl Sink {
    /// Select the sink from the presence of the `--write` flag
    #[must_use]
    pub const fn from_write_flag(write: bool) -> Self {
        if write { Self::Write } else { Self::Stream }
    }
}

/// Deliver the updated manifest through the chosen sink.
///
/// Stream mode warns exactly once on stderr before printing, so a piped
/// stdout still carries nothing but the rendered document.
pub fn emit(manifest: &Manifest, sink: Sink) -> Result<(), ManifestError> {
    match sink {
        Sink::Write => manifest.write(),
        Sink::Stream => {
            eprintln!(
                "{} esmap no longer rewrites {} by default; streaming the updated manifest to stdout (pass --write to rewrite the file in place)",
                "warning:".yellow().bold(),
                manifest.path().display()
            );
            print!("{}", manifest.render()?);
            Ok(())
        },
    }
}
