//! Per-file decode parameters

use crate::common::errors::ContextError;
use crate::common::fixed_point::PipPrecision;

/// Everything the decoder needs to know about one input file
///
/// Built once per file (usually by filename inference) and read-only
/// afterwards; nothing carries over from one file to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeContext {
    symbol: String,
    timestamp_anchor: i64,
    emit_all_ticks: bool,
    pip_precision: PipPrecision,
}

impl DecodeContext {
    pub fn new(
        symbol: impl Into<String>,
        timestamp_anchor: i64,
        emit_all_ticks: bool,
        pip_precision: PipPrecision,
    ) -> Result<Self, ContextError> {
        let symbol = symbol.into();
        if symbol.is_empty() {
            return Err(ContextError::EmptySymbol);
        }
        Ok(Self {
            symbol,
            timestamp_anchor,
            emit_all_ticks,
            pip_precision,
        })
    }

    /// Instrument code printed on every line
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Unix seconds added to each record's relative timestamp
    pub fn timestamp_anchor(&self) -> i64 {
        self.timestamp_anchor
    }

    /// When false, ticks identical to the last emitted one are dropped
    pub fn emit_all_ticks(&self) -> bool {
        self.emit_all_ticks
    }

    pub fn pip_precision(&self) -> PipPrecision {
        self.pip_precision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_symbol_rejected() {
        assert_eq!(
            DecodeContext::new("", 0, false, PipPrecision::FIVE),
            Err(ContextError::EmptySymbol)
        );
    }

    #[test]
    fn test_accessors() {
        let ctx = DecodeContext::new("EURUSD", 1_705_309_200, true, PipPrecision::THREE).unwrap();
        assert_eq!(ctx.symbol(), "EURUSD");
        assert_eq!(ctx.timestamp_anchor(), 1_705_309_200);
        assert!(ctx.emit_all_ticks());
        assert_eq!(ctx.pip_precision(), PipPrecision::THREE);
    }
}
