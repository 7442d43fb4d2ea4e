//! Instrument precision policy
//!
//! Decides how many fractional digits an instrument is quoted to from its
//! symbol alone. Most pairs use five digits; pairs that involve a currency or
//! asset class quoted to three digits (yen, indices, commodities, gold,
//! silver) use three.
//!
//! ## Matching rules
//!
//! For a symbol of length `n`:
//! - base code `symbol[n-6..n-3]` or quote code `symbol[n-3..]` found in
//!   `three_letter`
//! - two-character country code `symbol[n-5..n-3]` found in `two_letter`
//!
//! The tables are plain data so deployments can extend them from
//! configuration without touching the matcher.
//!
//! ```rust
//! use dukas_types::{PipPrecision, PrecisionPolicy};
//!
//! let policy = PrecisionPolicy::default();
//! assert_eq!(policy.precision_for("EURUSD"), PipPrecision::FIVE);
//! assert_eq!(policy.precision_for("USDJPY"), PipPrecision::THREE);
//! ```

use crate::common::fixed_point::PipPrecision;
use serde::{Deserialize, Serialize};

/// Codes quoted to three digits when they appear as base or quote currency
pub const THREE_DIGIT_CODES: [&str; 5] = ["IDX", "JPY", "CMD", "XAU", "XAG"];

/// Two-character country codes quoted to three digits
pub const THREE_DIGIT_COUNTRY_CODES: [&str; 1] = ["DE"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrecisionPolicy {
    /// Digits used when no table matches
    pub default_digits: PipPrecision,
    /// Digits used when a table matches
    pub reduced_digits: PipPrecision,
    pub three_letter: Vec<String>,
    pub two_letter: Vec<String>,
}

impl Default for PrecisionPolicy {
    fn default() -> Self {
        Self {
            default_digits: PipPrecision::FIVE,
            reduced_digits: PipPrecision::THREE,
            three_letter: THREE_DIGIT_CODES.iter().map(|c| c.to_string()).collect(),
            two_letter: THREE_DIGIT_COUNTRY_CODES
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

impl PrecisionPolicy {
    /// Pip precision for `symbol`
    pub fn precision_for(&self, symbol: &str) -> PipPrecision {
        if self.is_reduced(symbol) {
            self.reduced_digits
        } else {
            self.default_digits
        }
    }

    fn is_reduced(&self, symbol: &str) -> bool {
        let n = symbol.len();
        let base = tail_slice(symbol, n, 6, 3);
        let quote = tail_slice(symbol, n, 3, 3);
        let country = tail_slice(symbol, n, 5, 2);

        let three = self
            .three_letter
            .iter()
            .any(|code| Some(code.as_str()) == base || Some(code.as_str()) == quote);
        let two = self
            .two_letter
            .iter()
            .any(|code| Some(code.as_str()) == country);
        three || two
    }
}

/// `len` bytes starting `back` bytes before the end, if in range
fn tail_slice(symbol: &str, n: usize, back: usize, len: usize) -> Option<&str> {
    let start = n.checked_sub(back)?;
    symbol.get(start..start + len)
}
