//! Shared fixture builders for codec integration tests
//!
//! Streams are written field by field with `byteorder` rather than through
//! the zerocopy layouts under test.

#![allow(dead_code)]

use byteorder::{BigEndian, WriteBytesExt};

/// `(ts, ask, bid, ask_qty, bid_qty)`
pub type CompactRow = (u32, u32, u32, f32, f32);

/// `(ts, ask, bid, ask_qty, bid_qty)`
pub type LegacyRow = (u64, f64, f64, f64, f64);

pub fn compact_stream(rows: &[CompactRow]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(rows.len() * 20);
    for &(ts, ask, bid, ask_qty, bid_qty) in rows {
        buf.write_u32::<BigEndian>(ts).unwrap();
        buf.write_u32::<BigEndian>(ask).unwrap();
        buf.write_u32::<BigEndian>(bid).unwrap();
        buf.write_f32::<BigEndian>(ask_qty).unwrap();
        buf.write_f32::<BigEndian>(bid_qty).unwrap();
    }
    buf
}

pub fn legacy_stream(rows: &[LegacyRow]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(rows.len() * 40);
    for &(ts, ask, bid, ask_qty, bid_qty) in rows {
        buf.write_u64::<BigEndian>(ts).unwrap();
        buf.write_f64::<BigEndian>(ask).unwrap();
        buf.write_f64::<BigEndian>(bid).unwrap();
        buf.write_f64::<BigEndian>(ask_qty).unwrap();
        buf.write_f64::<BigEndian>(bid_qty).unwrap();
    }
    buf
}
