//! Pip precision and price rendering
//!
//! Compact records carry prices as unsigned integers scaled by `10^digits`,
//! legacy records carry IEEE-754 doubles. Both are rendered with the same
//! number of fractional digits so downstream tools see one column format per
//! instrument regardless of which layout the file used.
//!
//! Examples at 5 digits:
//! - fixed `123450` renders as `1.23450`
//! - float `1.2345` renders as `1.23450`

use crate::common::errors::PrecisionError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of fractional digits used to quote an instrument
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PipPrecision(u8);

impl PipPrecision {
    /// Largest digit count whose scale factor fits in a `u32`
    pub const MAX_DIGITS: u8 = 9;

    /// Majors and most crosses
    pub const FIVE: Self = Self(5);

    /// Yen crosses, indices, commodities and metals
    pub const THREE: Self = Self(3);

    pub fn new(digits: u8) -> Result<Self, PrecisionError> {
        if digits > Self::MAX_DIGITS {
            return Err(PrecisionError::TooManyDigits {
                digits,
                max: Self::MAX_DIGITS,
            });
        }
        Ok(Self(digits))
    }

    pub fn digits(self) -> u8 {
        self.0
    }

    /// Scale factor between a fixed-point price and its decimal value
    pub fn scale(self) -> u32 {
        10u32.pow(u32::from(self.0))
    }

    /// Render a fixed-point integer price at this precision
    pub fn fixed(self, raw: u32) -> QuotedPrice {
        QuotedPrice::Fixed { raw, precision: self }
    }

    /// Render a floating-point price at this precision
    pub fn float(self, value: f64) -> QuotedPrice {
        QuotedPrice::Float {
            value,
            precision: self,
        }
    }
}

impl Default for PipPrecision {
    fn default() -> Self {
        Self::FIVE
    }
}

impl TryFrom<u8> for PipPrecision {
    type Error = PrecisionError;

    fn try_from(digits: u8) -> Result<Self, Self::Error> {
        Self::new(digits)
    }
}

impl From<PipPrecision> for u8 {
    fn from(precision: PipPrecision) -> Self {
        precision.0
    }
}

impl fmt::Display for PipPrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A price paired with the precision it should be printed at
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuotedPrice {
    /// Integer scaled by `10^digits`; printed by integer division so no
    /// floating-point rounding is involved
    Fixed { raw: u32, precision: PipPrecision },
    /// Double printed with `digits` fractional digits
    Float { value: f64, precision: PipPrecision },
}

impl fmt::Display for QuotedPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            QuotedPrice::Fixed { raw, precision } => {
                let scale = precision.scale();
                let width = usize::from(precision.digits());
                write!(f, "{}.{:0width$}", raw / scale, raw % scale, width = width)
            }
            QuotedPrice::Float { value, precision } => {
                write!(f, "{:.*}", usize::from(precision.digits()), value)
            }
        }
    }
}
