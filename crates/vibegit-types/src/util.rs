use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Ellipsis appended by [`ellipsize`]
pub const ELLIPSIS: char = '…';

/// Keep at most `max` characters, without any marker
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

/// Truncate to `max` characters and append a single `…` when anything was cut
pub fn ellipsize(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => {
            let mut out = String::with_capacity(idx + ELLIPSIS.len_utf8());
            out.push_str(&s[..idx]);
            out.push(ELLIPSIS);
            out
        }
        None => s.to_string(),
    }
}

/// Replace every whitespace run (newlines included) with a single space and trim
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse an ISO 8601 timestamp into UTC.
///
/// Accepts RFC 3339 with any offset. A timestamp without offset is read as UTC,
/// and a bare date (`2024-01-01`) as midnight UTC.
pub fn parse_timestamp(ts: &str) -> Option<DateTime<Utc>> {
    let ts = ts.trim();
    if ts.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(ts, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
