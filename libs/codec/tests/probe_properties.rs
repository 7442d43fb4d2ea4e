//! Property tests for format classification and sparsification

mod common;

use common::compact_stream;
use dukas_codec::{decode_stream, StreamFormat, LEGACY_GAP_THRESHOLD_MS};
use dukas_types::{DecodeContext, PipPrecision};
use proptest::prelude::*;

fn ctx(emit_all: bool) -> DecodeContext {
    DecodeContext::new("EURUSD", 0, emit_all, PipPrecision::FIVE).unwrap()
}

proptest! {
    #[test]
    fn compact_streams_within_an_hour_decode_every_record(
        start in 0u32..1_000_000,
        first_gap in 0u32..=LEGACY_GAP_THRESHOLD_MS,
        extra in 0usize..64,
        tail in 0usize..20,
    ) {
        let mut rows = vec![
            (start, 200_000, 100_000, 1.0, 1.0),
            (start.wrapping_add(first_gap), 200_001, 100_000, 1.0, 1.0),
        ];
        rows.extend((0..extra as u32).map(|i| (start, 200_002 + i, 100_000, 1.0, 1.0)));
        let mut bytes = compact_stream(&rows);
        bytes.extend(std::iter::repeat(0u8).take(tail));

        let mut out = Vec::new();
        let summary = decode_stream(&ctx(false), bytes.as_slice(), &mut out).unwrap();

        prop_assert_eq!(summary.format, StreamFormat::Compact);
        prop_assert_eq!(summary.records_decoded, rows.len() as u64);
        prop_assert_eq!(summary.trailing_bytes, tail);
        prop_assert_eq!(String::from_utf8(out).unwrap().lines().count(), rows.len());
    }

    #[test]
    fn gaps_over_an_hour_are_legacy(
        first in any::<u32>(),
        gap in (LEGACY_GAP_THRESHOLD_MS + 1)..=u32::MAX,
    ) {
        let bytes = compact_stream(&[
            (first, 1, 1, 1.0, 1.0),
            (first.wrapping_add(gap), 1, 1, 1.0, 1.0),
        ]);

        let mut out = Vec::new();
        let summary = decode_stream(&ctx(false), bytes.as_slice(), &mut out).unwrap();

        prop_assert_eq!(summary.format, StreamFormat::Legacy);
        prop_assert_eq!(summary.records_decoded, 1);
    }

    #[test]
    fn repeated_ticks_collapse_unless_all_ticks(copies in 2usize..32) {
        let rows = vec![(0, 123_470, 123_450, 1.0, 2.0); copies];
        let bytes = compact_stream(&rows);

        for (emit_all, expected) in [(false, 1usize), (true, copies)] {
            let mut out = Vec::new();
            decode_stream(&ctx(emit_all), bytes.as_slice(), &mut out).unwrap();
            prop_assert_eq!(String::from_utf8(out).unwrap().lines().count(), expected);
        }
    }
}
