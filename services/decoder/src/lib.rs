//! # dukasdec - per-file orchestration
//!
//! Opens each tick file, infers its decode context from the path and streams
//! the decoded lines to a shared writer. A failing file is logged and
//! counted; it never stops the run.

use anyhow::{Context, Result};
use dukas_codec::{decode_stream, infer_context, DecodeError, DecodeSummary};
use dukas_config::DecoderConfig;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Decode one tick file into `out`
///
/// The file is opened before its name is inspected, so a missing file is
/// reported as such even when its name would not infer either.
pub fn decode_file<W: Write>(
    path: &Path,
    config: &DecoderConfig,
    out: &mut W,
) -> Result<DecodeSummary> {
    let file = File::open(path)
        .with_context(|| format!("cannot open file `{}`", path.display()))?;

    let ctx = infer_context(
        &path.to_string_lossy(),
        &config.precision,
        config.emit_all_ticks,
    )?;

    decode_stream(&ctx, file, out).map_err(|e| {
        let context = match &e {
            DecodeError::InsufficientData { .. } => {
                format!("file `{}` corrupted", path.display())
            }
            DecodeError::Io { .. } => format!("I/O failure on `{}`", path.display()),
        };
        anyhow::Error::new(e).context(context)
    })
}

/// Decode every file in order, returning how many failed
pub fn decode_files<W: Write>(paths: &[PathBuf], config: &DecoderConfig, out: &mut W) -> usize {
    let mut failures = 0;

    for path in paths {
        match decode_file(path, config, out) {
            Ok(summary) => debug!(
                file = %path.display(),
                format = %summary.format,
                records = summary.records_decoded,
                emitted = summary.ticks_emitted,
                trailing_bytes = summary.trailing_bytes,
                "File decoded"
            ),
            Err(e) => {
                error!("Error: {:#}", e);
                failures += 1;
            }
        }
    }

    failures
}
