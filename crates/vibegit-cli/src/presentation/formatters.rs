use owo_colors::OwoColorize;
use vibegit_engine::Role;
use vibegit_types::{collapse_whitespace, ellipsize};

pub const NO_DATE: &str = "--------";
pub const NO_DURATION: &str = "-";

/// Compact human duration: `850ms`, `42s`, `6m 30s`, `2h 05m`
pub fn format_duration(ms: Option<i64>) -> String {
    let Some(ms) = ms else {
        return NO_DURATION.to_string();
    };

    let sign = if ms < 0 { "-" } else { "" };
    let ms = ms.unsigned_abs();
    let secs = ms / 1000;

    let body = if secs == 0 {
        format!("{}ms", ms)
    } else if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {:02}s", secs / 60, secs % 60)
    } else {
        format!("{}h {:02}m", secs / 3600, (secs % 3600) / 60)
    };

    format!("{}{}", sign, body)
}

/// Single-line preview of event text
pub fn preview(text: &str, max_chars: usize) -> String {
    ellipsize(&collapse_whitespace(text), max_chars)
}

pub fn paint_role(label: &str, role: Role, color: bool) -> String {
    if !color {
        return label.to_string();
    }
    match role {
        Role::User => label.green().to_string(),
        Role::Assistant => label.blue().to_string(),
        Role::Tool => label.yellow().to_string(),
        Role::File => label.magenta().to_string(),
        Role::System => label.dimmed().to_string(),
    }
}

pub fn paint_id(id: &str, color: bool) -> String {
    if color {
        id.cyan().bold().to_string()
    } else {
        id.to_string()
    }
}

pub fn paint_dim(text: &str, color: bool) -> String {
    if color {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(None), "-");
        assert_eq!(format_duration(Some(850)), "850ms");
        assert_eq!(format_duration(Some(5000)), "5s");
        assert_eq!(format_duration(Some(390_000)), "6m 30s");
        assert_eq!(format_duration(Some(7_500_000)), "2h 05m");
        assert_eq!(format_duration(Some(-2000)), "-2s");
    }

    #[test]
    fn test_preview_is_single_line() {
        assert_eq!(preview("a\n  b\tc", 10), "a b c");
        assert_eq!(preview("abcdefghij", 4), "abcd…");
    }

    #[test]
    fn test_no_color_is_verbatim() {
        assert_eq!(paint_role("user", Role::User, false), "user");
        assert_eq!(paint_id("r-1", false), "r-1");
    }
}
