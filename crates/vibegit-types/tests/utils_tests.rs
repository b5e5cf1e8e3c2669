use vibegit_types::*;

#[test]
fn test_truncate_chars() {
    assert_eq!(truncate_chars("short", 10), "short");
    assert_eq!(truncate_chars("abcdef", 3), "abc");
    // multibyte characters count as one
    assert_eq!(truncate_chars("日本語テキスト", 3), "日本語");
}

#[test]
fn test_ellipsize() {
    assert_eq!(ellipsize("hello", 5), "hello");

    let long = "a".repeat(130);
    let out = ellipsize(&long, 120);
    assert_eq!(out.chars().count(), 121);
    assert!(out.ends_with('…'));
    assert!(long.starts_with(out.trim_end_matches('…')));
}

#[test]
fn test_collapse_whitespace() {
    assert_eq!(collapse_whitespace("  fix\n\nthe   build\t"), "fix the build");
    assert_eq!(collapse_whitespace("   "), "");
}

#[test]
fn test_parse_timestamp() {
    let utc = parse_timestamp("2024-01-01T00:00:05Z").unwrap();
    let offset = parse_timestamp("2024-01-01T08:00:05+08:00").unwrap();
    assert_eq!(utc, offset);

    let naive = parse_timestamp("2024-01-01T00:00:05").unwrap();
    assert_eq!(naive, utc);

    assert!(parse_timestamp("").is_none());
    assert!(parse_timestamp("not a date").is_none());
}

#[test]
fn test_parse_date_only_timestamp_is_midnight_utc() {
    let date = parse_timestamp("2024-01-01").unwrap();
    assert_eq!(date, parse_timestamp("2024-01-01T00:00:00Z").unwrap());

    assert!(parse_timestamp("2024-13-01").is_none());
    assert!(parse_timestamp("2024-01").is_none());
}
