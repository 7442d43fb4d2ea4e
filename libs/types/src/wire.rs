//! On-disk record layouts
//!
//! Both historical tick formats are fixed-width, big-endian and carry no
//! header or format tag:
//!
//! ```text
//! legacy (40 bytes)
//! ┌──────────┬──────────┬──────────┬──────────┬──────────┐
//! │ ts  u64  │ ask  f64 │ bid  f64 │ askq f64 │ bidq f64 │
//! └──────────┴──────────┴──────────┴──────────┴──────────┘
//! compact (20 bytes)
//! ┌────────┬────────┬────────┬────────┬────────┐
//! │ ts u32 │ask u32 │bid u32 │askq f32│bidq f32│
//! └────────┴────────┴────────┴────────┴────────┘
//! ```
//!
//! Float fields are stored as their IEEE-754 bit patterns. The structs below
//! keep every field as a big-endian integer; [`WireRecord::decode`] does the
//! byte-order correction and the bit-pattern reinterpretation in one place.

use crate::tick::{CompactTick, LegacyTick};
use std::mem::size_of;
use zerocopy::byteorder::{BigEndian, U32, U64};
use zerocopy::{AsBytes, FromBytes, FromZeroes, Unaligned};

/// A fixed-width big-endian record layout
pub trait WireRecord: FromBytes + AsBytes + Unaligned + Copy {
    /// Record width in bytes
    const SIZE: usize;

    /// Host-order view of the record
    type Tick: Copy;

    fn decode(&self) -> Self::Tick;

    fn encode(tick: &Self::Tick) -> Self;
}

/// Legacy record: millisecond timestamp and four doubles
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsBytes, FromBytes, FromZeroes, Unaligned)]
pub struct LegacyWire {
    pub ts: U64<BigEndian>,
    pub ask: U64<BigEndian>,
    pub bid: U64<BigEndian>,
    pub ask_qty: U64<BigEndian>,
    pub bid_qty: U64<BigEndian>,
}

/// Compact record: millisecond timestamp, fixed-point prices and float volumes
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsBytes, FromBytes, FromZeroes, Unaligned)]
pub struct CompactWire {
    pub ts: U32<BigEndian>,
    pub ask: U32<BigEndian>,
    pub bid: U32<BigEndian>,
    pub ask_qty: U32<BigEndian>,
    pub bid_qty: U32<BigEndian>,
}

pub const LEGACY_RECORD_SIZE: usize = 40;
pub const COMPACT_RECORD_SIZE: usize = 20;

const _: () = assert!(size_of::<LegacyWire>() == LEGACY_RECORD_SIZE);
const _: () = assert!(size_of::<CompactWire>() == COMPACT_RECORD_SIZE);
// The format probe relies on one legacy record spanning exactly two compact ones
const _: () = assert!(LEGACY_RECORD_SIZE == 2 * COMPACT_RECORD_SIZE);

impl WireRecord for LegacyWire {
    const SIZE: usize = LEGACY_RECORD_SIZE;
    type Tick = LegacyTick;

    fn decode(&self) -> LegacyTick {
        LegacyTick {
            ts_ms: self.ts.get(),
            ask: f64::from_bits(self.ask.get()),
            bid: f64::from_bits(self.bid.get()),
            ask_qty: f64::from_bits(self.ask_qty.get()),
            bid_qty: f64::from_bits(self.bid_qty.get()),
        }
    }

    fn encode(tick: &LegacyTick) -> Self {
        Self {
            ts: U64::new(tick.ts_ms),
            ask: U64::new(tick.ask.to_bits()),
            bid: U64::new(tick.bid.to_bits()),
            ask_qty: U64::new(tick.ask_qty.to_bits()),
            bid_qty: U64::new(tick.bid_qty.to_bits()),
        }
    }
}

impl WireRecord for CompactWire {
    const SIZE: usize = COMPACT_RECORD_SIZE;
    type Tick = CompactTick;

    fn decode(&self) -> CompactTick {
        CompactTick {
            ts_ms: self.ts.get(),
            ask: self.ask.get(),
            bid: self.bid.get(),
            ask_qty: f32::from_bits(self.ask_qty.get()),
            bid_qty: f32::from_bits(self.bid_qty.get()),
        }
    }

    fn encode(tick: &CompactTick) -> Self {
        Self {
            ts: U32::new(tick.ts_ms),
            ask: U32::new(tick.ask),
            bid: U32::new(tick.bid),
            ask_qty: U32::new(tick.ask_qty.to_bits()),
            bid_qty: U32::new(tick.bid_qty.to_bits()),
        }
    }
}
