//! Decoded top-of-book ticks
//!
//! Host-order views of the two record layouts in [`crate::wire`]. Nothing is
//! rescaled here: compact prices stay as scaled integers until they are
//! rendered with the instrument's pip precision.

use crate::common::fixed_point::{PipPrecision, QuotedPrice};

/// Quote side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Bid,
    Ask,
}

/// Tick decoded from a 40-byte legacy record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegacyTick {
    /// Milliseconds relative to the file's anchor
    pub ts_ms: u64,
    pub ask: f64,
    pub bid: f64,
    pub ask_qty: f64,
    pub bid_qty: f64,
}

/// Tick decoded from a 20-byte compact record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompactTick {
    /// Milliseconds relative to the file's anchor
    pub ts_ms: u32,
    /// Ask price scaled by `10^pip_precision`
    pub ask: u32,
    /// Bid price scaled by `10^pip_precision`
    pub bid: u32,
    pub ask_qty: f32,
    pub bid_qty: f32,
}

/// Common view over both tick shapes used for sparsification and rendering
pub trait Quote: Copy {
    /// Bit-exact identity of the quote's prices and quantities
    ///
    /// Two ticks with equal keys carry identical bid/ask prices and
    /// quantities; the timestamp is not part of the key.
    type Key: Copy + PartialEq + std::fmt::Debug;

    fn timestamp_ms(&self) -> u64;

    fn dedup_key(&self) -> Self::Key;

    fn price(&self, side: Side, precision: PipPrecision) -> QuotedPrice;

    fn quantity(&self, side: Side) -> f64;
}

impl Quote for LegacyTick {
    /// `[bid, bid_qty, ask, ask_qty]` bit patterns
    type Key = [u64; 4];

    fn timestamp_ms(&self) -> u64 {
        self.ts_ms
    }

    fn dedup_key(&self) -> [u64; 4] {
        [
            self.bid.to_bits(),
            self.bid_qty.to_bits(),
            self.ask.to_bits(),
            self.ask_qty.to_bits(),
        ]
    }

    fn price(&self, side: Side, precision: PipPrecision) -> QuotedPrice {
        match side {
            Side::Bid => precision.float(self.bid),
            Side::Ask => precision.float(self.ask),
        }
    }

    fn quantity(&self, side: Side) -> f64 {
        match side {
            Side::Bid => self.bid_qty,
            Side::Ask => self.ask_qty,
        }
    }
}

impl Quote for CompactTick {
    /// `[bid, bid_qty, ask, ask_qty]` with volumes as bit patterns
    type Key = [u32; 4];

    fn timestamp_ms(&self) -> u64 {
        u64::from(self.ts_ms)
    }

    fn dedup_key(&self) -> [u32; 4] {
        [
            self.bid,
            self.bid_qty.to_bits(),
            self.ask,
            self.ask_qty.to_bits(),
        ]
    }

    fn price(&self, side: Side, precision: PipPrecision) -> QuotedPrice {
        match side {
            Side::Bid => precision.fixed(self.bid),
            Side::Ask => precision.fixed(self.ask),
        }
    }

    fn quantity(&self, side: Side) -> f64 {
        match side {
            Side::Bid => f64::from(self.bid_qty),
            Side::Ask => f64::from(self.ask_qty),
        }
    }
}
