use super::*;

#[test]
fn parses_rfc3339_with_offset() {
    let parsed = parse_activity_time("2024-09-02T15:30:00-04:00").unwrap();
    assert_eq!(parsed.unix_timestamp(), 1_725_305_400);
}

#[test]
fn parses_naive_datetime_as_utc() {
    let with_t = parse_activity_time("2024-09-02T19:30").unwrap();
    let with_space = parse_activity_time("2024-09-02 19:30:00").unwrap();
    assert_eq!(with_t, with_space);
    assert_eq!(with_t.unix_timestamp(), 1_725_305_400);
}

#[test]
fn parses_bare_date_as_midnight() {
    let parsed = parse_activity_time("2024-09-02").unwrap();
    assert_eq!(parsed.unix_timestamp(), 1_725_235_200);
}

#[test]
fn trims_surrounding_whitespace() {
    assert!(parse_activity_time("  2024-09-02  ").is_some());
}

#[test]
fn rejects_empty_and_free_text() {
    assert_eq!(parse_activity_time(""), None);
    assert_eq!(parse_activity_time("   "), None);
    assert_eq!(parse_activity_time("Mondays after school"), None);
}

#[test]
fn earlier_times_order_first() {
    let morning = parse_activity_time("2024-09-02T08:00:00Z").unwrap();
    let evening = parse_activity_time("2024-09-02 18:00").unwrap();
    assert!(morning < evening);
}
