//! # Decode Loop - probe, then stream the detected layout
//!
//! ```text
//! bytes → RecordReader → probe ─┬─ Compact([t0, t1]) → compact loop ─┐
//!                               └─ Legacy(t0)        → legacy loop  ─┴→ TickEmitter → text
//! ```
//!
//! The ticks decoded during the probe are emitted first, then the loop keeps
//! reading records of the same layout until the stream ends.

use crate::emitter::TickEmitter;
use crate::error::{DecodeError, DecodeResult};
use crate::probe::{probe, Probe, StreamFormat};
use crate::reader::RecordReader;
use dukas_types::{CompactWire, DecodeContext, LegacyWire, Quote, WireRecord};
use std::io::{Read, Write};
use tracing::debug;

/// Records requested per read call
pub const BATCH_RECORDS: usize = 512;

/// Outcome of decoding one stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeSummary {
    pub format: StreamFormat,
    /// Whole records decoded, including the probe window
    pub records_decoded: u64,
    /// Lines written after sparsification
    pub ticks_emitted: u64,
    /// Bytes of an incomplete final record that were ignored
    pub trailing_bytes: usize,
}

/// Decode a whole tick stream from `input`, writing lines to `out`
///
/// Fails with [`DecodeError::InsufficientData`] before writing anything if
/// the stream is too short to probe.
pub fn decode_stream<R: Read, W: Write>(
    ctx: &DecodeContext,
    input: R,
    out: &mut W,
) -> DecodeResult<DecodeSummary> {
    let mut reader = RecordReader::new(input);

    let summary = match probe(&mut reader)? {
        Probe::Compact(head) => {
            run::<CompactWire, _, _>(ctx, &mut reader, out, &head, StreamFormat::Compact)?
        }
        Probe::Legacy(first) => {
            run::<LegacyWire, _, _>(ctx, &mut reader, out, &[first], StreamFormat::Legacy)?
        }
    };

    out.flush()
        .map_err(|e| DecodeError::io("flushing output", e))?;

    debug!(
        symbol = ctx.symbol(),
        format = %summary.format,
        records = summary.records_decoded,
        emitted = summary.ticks_emitted,
        bytes = reader.bytes_read(),
        "Decoded tick stream"
    );
    Ok(summary)
}

fn run<Wr, R, W>(
    ctx: &DecodeContext,
    reader: &mut RecordReader<R>,
    out: &mut W,
    head: &[Wr::Tick],
    format: StreamFormat,
) -> DecodeResult<DecodeSummary>
where
    Wr: WireRecord,
    Wr::Tick: Quote,
    R: Read,
    W: Write,
{
    let mut emitter = TickEmitter::<Wr::Tick, _>::new(ctx, &mut *out);
    let mut records = head.len() as u64;
    for tick in head {
        emitter.emit(tick)?;
    }

    let mut batch = Vec::with_capacity(BATCH_RECORDS);
    loop {
        batch.clear();
        let n = reader.read_batch::<Wr>(BATCH_RECORDS, &mut batch)?;
        for tick in &batch {
            emitter.emit(tick)?;
        }
        records += n as u64;
        if n < BATCH_RECORDS {
            break;
        }
    }

    Ok(DecodeSummary {
        format,
        records_decoded: records,
        ticks_emitted: emitter.emitted(),
        trailing_bytes: reader.trailing_bytes(),
    })
}
