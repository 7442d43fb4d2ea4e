//! # Tick Emitter - sparsification and line rendering
//!
//! Turns decoded ticks into tab-separated text lines:
//!
//! ```text
//! <secs>.<ms>  <symbol>  <bid qty>  <bid>  <ask>  <ask qty>
//! 1705309200.125	EURUSD	1.500000	1.23450	1.23470	2.000000
//! ```
//!
//! Unless the context asks for every tick, a tick whose bid/ask prices and
//! quantities are bit-identical to the last emitted one is dropped. The
//! "last emitted" state belongs to one emitter, and the decoder builds a
//! fresh emitter per file and per layout.

use crate::error::{DecodeError, DecodeResult};
use dukas_types::{DecodeContext, Quote, Side};
use std::io::Write;

/// Stateful writer of tick lines for one decode run
pub struct TickEmitter<'a, Q: Quote, W: Write> {
    ctx: &'a DecodeContext,
    out: W,
    last: Option<Q::Key>,
    emitted: u64,
}

impl<'a, Q: Quote, W: Write> TickEmitter<'a, Q, W> {
    pub fn new(ctx: &'a DecodeContext, out: W) -> Self {
        Self {
            ctx,
            out,
            last: None,
            emitted: 0,
        }
    }

    /// Whether `tick` would produce a line given the current state
    pub fn should_emit(&self, tick: &Q) -> bool {
        self.ctx.emit_all_ticks() || self.last != Some(tick.dedup_key())
    }

    /// Write `tick` if it passes the sparsification check
    ///
    /// Returns whether a line was written.
    pub fn emit(&mut self, tick: &Q) -> DecodeResult<bool> {
        let emit = self.should_emit(tick);
        if emit {
            self.write_line(tick)?;
            self.emitted += 1;
        }
        if !self.ctx.emit_all_ticks() {
            self.last = Some(tick.dedup_key());
        }
        Ok(emit)
    }

    fn write_line(&mut self, tick: &Q) -> DecodeResult<()> {
        let ts = tick.timestamp_ms();
        let secs = self.ctx.timestamp_anchor() + (ts / 1000) as i64;
        let millis = ts % 1000;
        let precision = self.ctx.pip_precision();

        writeln!(
            self.out,
            "{}.{:03}\t{}\t{:.6}\t{}\t{}\t{:.6}",
            secs,
            millis,
            self.ctx.symbol(),
            tick.quantity(Side::Bid),
            tick.price(Side::Bid, precision),
            tick.price(Side::Ask, precision),
            tick.quantity(Side::Ask),
        )
        .map_err(|e| DecodeError::io("writing tick line", e))
    }

    /// Lines written so far
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
