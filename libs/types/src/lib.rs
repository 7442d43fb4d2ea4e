//! # Dukas Types Library
//!
//! Data definitions for Dukascopy tick files.
//!
//! ## Design Philosophy
//!
//! - **Explicit Wire Layouts**: both record formats are `repr(C)` zerocopy structs
//!   with big-endian fields, so byte order is part of the type
//! - **No Rescaling on Read**: compact prices stay scaled integers until rendered
//! - **Policy as Data**: precision tables are plain serde data, not matcher code
//! - **Per-File Context**: everything file-specific lives in [`DecodeContext`]
//!
//! ## Quick Start
//!
//! ```rust
//! use dukas_types::{CompactWire, PipPrecision, Quote, Side, WireRecord};
//! use zerocopy::FromBytes;
//!
//! let bytes = [
//!     0, 0, 0x03, 0xe8, // ts = 1000 ms
//!     0, 0x01, 0xe2, 0x4e, // ask = 123470
//!     0, 0x01, 0xe2, 0x3a, // bid = 123450
//!     0x3f, 0x80, 0, 0, // ask qty = 1.0
//!     0x40, 0, 0, 0, // bid qty = 2.0
//! ];
//! let tick = CompactWire::read_from(&bytes[..]).unwrap().decode();
//! assert_eq!(tick.price(Side::Bid, PipPrecision::FIVE).to_string(), "1.23450");
//! ```

pub mod common;
pub mod context;
pub mod precision;
pub mod tick;
pub mod wire;

// Re-export common types for convenience
pub use common::errors::{ContextError, PrecisionError};
pub use common::fixed_point::{PipPrecision, QuotedPrice};
pub use context::DecodeContext;
pub use precision::PrecisionPolicy;
pub use tick::{CompactTick, LegacyTick, Quote, Side};
pub use wire::{CompactWire, LegacyWire, WireRecord, COMPACT_RECORD_SIZE, LEGACY_RECORD_SIZE};
