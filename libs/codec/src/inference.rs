//! # Filename Inference - symbol, anchor and precision from a path
//!
//! Tick files are published in a directory tree such as
//! `EURUSD/2024/01/15/09h_ticks.bi5`, and the records themselves only carry
//! milliseconds since the top of the hour. Everything else is recovered from
//! the path:
//!
//! - **symbol**: first run of at least six `A-Z` characters
//! - **anchor**: `/YYYY/MM/DD/` after the symbol, then (past any further
//!   slashes) an `HHh` hour marker; UTC seconds of that hour
//! - **precision**: looked up from the symbol through [`PrecisionPolicy`]

use crate::error::InferenceError;
use chrono::{NaiveDate, TimeZone, Utc};
use dukas_types::{DecodeContext, PrecisionPolicy};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

/// Minimum length of an instrument code
pub const MIN_SYMBOL_LEN: usize = 6;

static SYMBOL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("[A-Z]{{{},}}", MIN_SYMBOL_LEN)).expect("symbol pattern is valid")
});

static ANCHOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/(\d{4})/(\d{2})/(\d{2})/+(\d{2})h").expect("anchor pattern is valid")
});

/// Build the decode context for the file at `path`
pub fn infer_context(
    path: &str,
    policy: &PrecisionPolicy,
    emit_all_ticks: bool,
) -> Result<DecodeContext, InferenceError> {
    let (symbol, rest) = guess_symbol(path).ok_or_else(|| InferenceError::NoSymbol {
        path: path.to_string(),
    })?;
    let anchor = guess_anchor(rest).unwrap_or(0);
    let precision = policy.precision_for(symbol);

    debug!(%path, %symbol, anchor, %precision, "Inferred decode parameters");

    DecodeContext::new(symbol, anchor, emit_all_ticks, precision).map_err(|_| {
        InferenceError::NoSymbol {
            path: path.to_string(),
        }
    })
}

/// First qualifying uppercase run and the remainder of the path after it
pub fn guess_symbol(path: &str) -> Option<(&str, &str)> {
    let m = SYMBOL_RE.find(path)?;
    Some((m.as_str(), &path[m.end()..]))
}

/// Unix seconds of the first valid `/YYYY/MM/DD/HHh` marker in `path`
///
/// Candidates naming an impossible date or hour are skipped.
pub fn guess_anchor(path: &str) -> Option<i64> {
    ANCHOR_RE.captures_iter(path).find_map(|caps| {
        let field = |i: usize| caps[i].parse::<u32>().ok();
        let (year, month, day, hour) = (field(1)?, field(2)?, field(3)?, field(4)?);

        let stamp = NaiveDate::from_ymd_opt(year as i32, month, day)
            .and_then(|date| date.and_hms_opt(hour, 0, 0))
            .map(|naive| Utc.from_utc_datetime(&naive).timestamp());
        if stamp.is_none() {
            warn!(
                candidate = &caps[0],
                "Skipping date marker that is not a valid UTC hour"
            );
        }
        stamp
    })
}
