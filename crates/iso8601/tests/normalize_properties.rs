//! Property tests for normalization and format/parse stability.

use hapitime_iso8601::{
    IsoDuration, Temporal7, add_duration, format, format_range, is_normalized, normalize,
    parse_datum, parse_range, subtract_duration,
};
use proptest::prelude::*;

fn raw_tuple() -> impl Strategy<Value = Temporal7> {
    prop::array::uniform7(-1000i32..=1000).prop_map(Temporal7::from_fields)
}

fn extreme_tuple() -> impl Strategy<Value = Temporal7> {
    let field = prop_oneof![
        6 => -1000i32..=1000,
        1 => any::<i32>(),
        1 => Just(i32::MIN),
        1 => Just(i32::MAX),
    ];
    prop::array::uniform7(field).prop_map(Temporal7::from_fields)
}

fn instant() -> impl Strategy<Value = Temporal7> {
    (
        0i32..=99_999,
        1i32..=12,
        1i32..=31,
        0i32..24,
        0i32..60,
        0i32..60,
        prop_oneof![Just(0i32), 0i32..1_000_000_000],
    )
        .prop_map(|(y, mo, d, h, mi, s, ns)| normalize(Temporal7::new(y, mo, d.min(28), h, mi, s, ns)))
}

fn delta() -> impl Strategy<Value = IsoDuration> {
    (0i32..5, 0i32..24, 0i32..400, 0i32..48, 0i32..120, 0i32..120)
        .prop_map(|(y, mo, d, h, mi, s)| IsoDuration::new(y, mo, d, h, mi, s, 0))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn normalize_is_idempotent(t in raw_tuple()) {
        let once = normalize(t);
        prop_assert_eq!(normalize(once), once);
    }

    #[test]
    fn normalize_yields_canonical_fields(t in raw_tuple()) {
        prop_assert!(is_normalized(normalize(t)));
    }

    #[test]
    fn extreme_fields_normalize_idempotently(t in extreme_tuple()) {
        let once = normalize(t);
        prop_assert!(is_normalized(once));
        prop_assert_eq!(normalize(once), once);
    }

    #[test]
    fn formatted_instant_reparses_identically(t in instant()) {
        prop_assert_eq!(parse_datum(&format(t)).unwrap(), t);
    }

    #[test]
    fn formatted_range_reparses_identically(a in instant(), b in instant()) {
        let text = format_range(a, b);
        let range = parse_range(&text).unwrap();
        prop_assert_eq!(range.start(), a);
        prop_assert_eq!(range.end(), b);
    }

    #[test]
    fn same_day_range_reparses_identically(t in instant(), minutes in 0i32..60) {
        let end = Temporal7::new(t.year(), t.month(), t.day(), t.hour(), minutes, 0, 0);
        let range = parse_range(&format_range(t, end)).unwrap();
        prop_assert_eq!(range.start(), t);
        prop_assert_eq!(range.end(), end);
    }

    #[test]
    fn subtract_undoes_add_for_time_only_deltas(t in instant(), h in 0i32..100, m in 0i32..1000) {
        let d = IsoDuration::new(0, 0, 0, h, m, 0, 0);
        prop_assert_eq!(subtract_duration(add_duration(t, &d), &d), t);
    }

    #[test]
    fn adding_a_duration_never_goes_backwards(t in instant(), d in delta()) {
        prop_assert!(add_duration(t, &d) >= t);
    }
}
