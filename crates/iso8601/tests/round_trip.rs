use hapitime_iso8601::{
    Field, Temporal7, format, format_range, parse_datum, parse_datum_detailed, parse_range,
};

/// Canonical literals that must render back to exactly the same text.
const CORPUS: &[&str] = &[
    "2012-03-27T12:22:36.786Z",
    "2012-03-27T12:22:36Z",
    "2007-003T00:00Z",
    "2012-03-27T12:22Z",
    "2012-100T02:00Z",
    "2012-03-27T12:22:36.000000001Z",
    "2012-03-27",
    "2012-100",
    "2000-02-29T23:59:59.999999999Z",
];

#[test]
fn corpus_round_trips_in_original_layout() {
    for &text in CORPUS {
        let parsed = parse_datum_detailed(text).unwrap();
        assert_eq!(parsed.to_iso_string(), text, "layout round trip for {text}");
    }
}

#[test]
fn corpus_reparses_after_canonical_format() {
    for &text in CORPUS {
        let t = parse_datum(text).unwrap();
        let canonical = format(t);
        assert_eq!(
            parse_datum(&canonical).unwrap(),
            t,
            "{text} formatted as {canonical} did not reparse identically"
        );
    }
}

#[test]
fn canonical_minimal_forms_are_fixed_points() {
    for text in [
        "2012-03-27T12:22:36Z",
        "2012-03-27T12:22Z",
        "2012-03-27T12:22:36.786000000Z",
        "2007-01-03T00:00Z",
    ] {
        assert_eq!(format(parse_datum(text).unwrap()), text);
    }
}

#[test]
fn ordinal_canonical_form() {
    assert_eq!(
        format(parse_datum("2007-003T00:00Z").unwrap()),
        "2007-01-03T00:00Z"
    );
}

#[test]
fn offset_renders_as_utc() {
    let parsed = parse_datum_detailed("2014-09-02T10:55:10-05:00").unwrap();
    assert_eq!(parsed.precision(), Field::Second);
    assert_eq!(parsed.to_iso_string(), "2014-09-02T15:55:10Z");
}

#[test]
fn range_text_round_trips() {
    for text in [
        "2007-03-01T13:00Z/2008-05-11T15:30Z",
        "2012-04-09T02:00Z/03:45Z",
        "2012-04-09T02:00:30Z/02:00:45Z",
    ] {
        let range = parse_range(text).unwrap();
        assert_eq!(format_range(range.start(), range.end()), text);
        assert_eq!(range.to_string(), text);
    }
}

#[test]
fn from_str_matches_parse() {
    let t: Temporal7 = "2012-03-27T12:22:36.786Z".parse().unwrap();
    assert_eq!(t, Temporal7::new(2012, 3, 27, 12, 22, 36, 786_000_000));
    assert_eq!(t.to_string(), "2012-03-27T12:22:36.786000000Z");
}
