//! # Format Probe - legacy vs compact detection
//!
//! Tick files carry no header, so the layout is guessed from the first 40
//! bytes. The window is read as two compact records; if their timestamps are
//! more than an hour apart the stream is taken to be legacy and the same 40
//! bytes are reinterpreted as one legacy record.
//!
//! ```text
//! window  [ 40 bytes                                ]
//! compact [ rec0 (20)          ][ rec1 (20)         ]
//! legacy  [ rec0 (40)                               ]
//! ```
//!
//! Consecutive compact ticks within one hourly file are never an hour apart,
//! while a legacy record read as a compact pair puts the high word of the
//! 64-bit timestamp (zero for any hourly file) and the low word of the bid
//! double in the two "timestamp" slots. The test is a heuristic; an unlucky
//! legacy file can still be misclassified.

use crate::error::{DecodeError, DecodeResult};
use crate::reader::RecordReader;
use dukas_types::{
    CompactTick, CompactWire, LegacyTick, LegacyWire, WireRecord, COMPACT_RECORD_SIZE,
    LEGACY_RECORD_SIZE,
};
use std::fmt;
use std::io::Read;
use tracing::debug;

/// Bytes consumed by the probe: two compact records, or one legacy record
pub const PROBE_WINDOW: usize = 2 * COMPACT_RECORD_SIZE;

const _: () = assert!(PROBE_WINDOW == LEGACY_RECORD_SIZE);

/// Largest gap between the first two compact timestamps still read as compact
pub const LEGACY_GAP_THRESHOLD_MS: u32 = 60 * 60 * 1000;

/// Record layout of a tick stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamFormat {
    /// 20-byte records, fixed-point prices
    Compact,
    /// 40-byte records, double prices
    Legacy,
}

impl fmt::Display for StreamFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamFormat::Compact => f.write_str("compact"),
            StreamFormat::Legacy => f.write_str("legacy"),
        }
    }
}

/// Probe result: the layout plus the ticks already decoded from the window
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Probe {
    Compact([CompactTick; 2]),
    Legacy(LegacyTick),
}

impl Probe {
    pub fn format(&self) -> StreamFormat {
        match self {
            Probe::Compact(_) => StreamFormat::Compact,
            Probe::Legacy(_) => StreamFormat::Legacy,
        }
    }
}

/// Classify a full probe window
///
/// The reinterpretation is done with `zerocopy::transmute!`, which refuses to
/// compile unless source and destination are exactly the same size.
pub fn classify(window: [u8; PROBE_WINDOW]) -> Probe {
    let pair: [CompactWire; 2] = zerocopy::transmute!(window);
    let first = pair[0].decode();
    let second = pair[1].decode();

    // wrapping difference: a backwards step looks like a huge gap
    let gap = second.ts_ms.wrapping_sub(first.ts_ms);
    if gap > LEGACY_GAP_THRESHOLD_MS {
        let legacy: LegacyWire = zerocopy::transmute!(window);
        Probe::Legacy(legacy.decode())
    } else {
        Probe::Compact([first, second])
    }
}

/// Read the probe window from `reader` and classify it
pub fn probe<R: Read>(reader: &mut RecordReader<R>) -> DecodeResult<Probe> {
    let mut window = [0u8; PROBE_WINDOW];
    let got = reader.read_window(&mut window)?;
    if got < PROBE_WINDOW {
        return Err(DecodeError::insufficient_data(PROBE_WINDOW, got));
    }

    let probe = classify(window);
    debug!(format = %probe.format(), "Classified tick stream");
    Ok(probe)
}
