//! Filename inference against realistic archive paths

use dukas_codec::{infer_context, InferenceError};
use dukas_types::{PipPrecision, PrecisionPolicy};

const JAN_15_2024_09H: i64 = 1_705_309_200;

#[test]
fn test_major_pair_path() {
    let ctx = infer_context(
        "EURUSD/2024/01/15/09h_ticks.bin",
        &PrecisionPolicy::default(),
        false,
    )
    .unwrap();

    assert_eq!(ctx.symbol(), "EURUSD");
    assert_eq!(ctx.pip_precision(), PipPrecision::FIVE);
    assert_eq!(ctx.timestamp_anchor(), JAN_15_2024_09H);
    assert!(!ctx.emit_all_ticks());
}

#[test]
fn test_yen_pair_path() {
    let ctx = infer_context(
        "USDJPY/2024/01/15/09h_ticks.bin",
        &PrecisionPolicy::default(),
        true,
    )
    .unwrap();

    assert_eq!(ctx.pip_precision(), PipPrecision::THREE);
    assert!(ctx.emit_all_ticks());
}

#[test]
fn test_metal_and_index_paths() {
    let policy = PrecisionPolicy::default();
    for path in [
        "/srv/ticks/XAUUSD/2023/06/01/00h_ticks.bi5",
        "/srv/ticks/XAGUSD/2023/06/01/00h_ticks.bi5",
        "/srv/ticks/BRENTCMDUSD/2023/06/01/00h_ticks.bi5",
    ] {
        let ctx = infer_context(path, &policy, false).unwrap();
        assert_eq!(ctx.pip_precision(), PipPrecision::THREE, "{path}");
        assert_eq!(ctx.timestamp_anchor(), 1_685_577_600, "{path}");
    }
}

#[test]
fn test_missing_date_defaults_anchor_to_zero() {
    let ctx = infer_context("/tmp/GBPUSD_ticks.bin", &PrecisionPolicy::default(), false).unwrap();

    assert_eq!(ctx.symbol(), "GBPUSD");
    assert_eq!(ctx.timestamp_anchor(), 0);
}

#[test]
fn test_date_before_symbol_is_ignored() {
    let ctx = infer_context(
        "/2024/01/15/09h/EURUSD/ticks.bin",
        &PrecisionPolicy::default(),
        false,
    )
    .unwrap();

    assert_eq!(ctx.timestamp_anchor(), 0);
}

#[test]
fn test_no_symbol_fails() {
    let err = infer_context("data_2024.bin", &PrecisionPolicy::default(), false).unwrap_err();

    assert_eq!(
        err,
        InferenceError::NoSymbol {
            path: "data_2024.bin".to_string()
        }
    );
    assert_eq!(
        err.to_string(),
        "cannot guess symbol and time parameters from filename `data_2024.bin`"
    );
}

#[test]
fn test_lowercase_symbol_is_not_recognised() {
    assert!(infer_context("eurusd/2024/01/15/09h.bin", &PrecisionPolicy::default(), false).is_err());
}
