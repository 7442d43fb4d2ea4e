//! # Dukas Tick Codec
//!
//! ## Purpose
//!
//! Decoding rules for Dukascopy tick files:
//! - Record readers for the 20-byte compact and 40-byte legacy layouts
//! - Format probe that tells the two apart from the first 40 bytes
//! - Sparsifying emitter that renders ticks as tab-separated lines
//! - Filename inference for symbol, hour anchor and pip precision
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → [codec] → services/decoder
//!     ↑           ↓              ↓
//! Wire Layouts  Probe/Decode   CLI, files,
//! Tick Types    Emit/Infer     exit status
//! ```
//!
//! ## What This Crate Does NOT Contain
//! - Argument parsing, file iteration or logging setup (belongs in services/)
//! - Configuration loading (belongs in libs/config)
//!
//! ## Example
//!
//! ```rust
//! use dukas_codec::{decode_stream, infer_context};
//! use dukas_types::PrecisionPolicy;
//!
//! let ctx = infer_context("EURUSD/2024/01/15/09h_ticks.bi5", &PrecisionPolicy::default(), false)?;
//! let mut out = Vec::new();
//! let err = decode_stream(&ctx, &[0u8; 10][..], &mut out).unwrap_err();
//! assert!(err.to_string().contains("Insufficient data"));
//! assert!(out.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod decoder;
pub mod emitter;
pub mod error;
pub mod inference;
pub mod probe;
pub mod reader;

pub use decoder::{decode_stream, DecodeSummary, BATCH_RECORDS};
pub use emitter::TickEmitter;
pub use error::{DecodeError, DecodeResult, InferenceError};
pub use inference::{guess_anchor, guess_symbol, infer_context, MIN_SYMBOL_LEN};
pub use probe::{classify, probe, Probe, StreamFormat, LEGACY_GAP_THRESHOLD_MS, PROBE_WINDOW};
pub use reader::RecordReader;
