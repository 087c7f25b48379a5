use chrono::{DateTime, Utc};
use futurework_core::models::parse_timestamp;

/// Truncate string to a max length, adding an ellipsis when truncated.
pub fn truncate_with_ellipsis(s: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }

    if s.chars().count() <= max_len {
        return s.to_string();
    }

    if max_len <= 3 {
        return ".".repeat(max_len);
    }

    let take = max_len - 3;
    let mut truncated: String = s.chars().take(take).collect();
    truncated.push_str("...");
    truncated
}

/// Clock time of a timestamp as shown on signal cards ("00:42:15", UTC).
pub fn format_clock(value: &str) -> Option<String> {
    let secs = parse_timestamp(value)?;
    let dt = DateTime::<Utc>::from_timestamp(secs, 0)?;
    Some(dt.format("%H:%M:%S").to_string())
}

/// Uppercase with spaced letters, the terminal stand-in for wide tracking
pub fn tracked(label: &str) -> String {
    label
        .to_uppercase()
        .chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_with_ellipsis() {
        assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
        assert_eq!(truncate_with_ellipsis("hello world", 8), "hello...");
        assert_eq!(truncate_with_ellipsis("hello", 2), "..");
        assert_eq!(truncate_with_ellipsis("hello", 0), "");
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock("2026-02-06T00:42:15Z").as_deref(), Some("00:42:15"));
        assert_eq!(format_clock("2026-02-06").as_deref(), Some("00:00:00"));
        assert_eq!(format_clock("soon"), None);
    }

    #[test]
    fn test_tracked() {
        assert_eq!(tracked("Ai"), "A I");
    }
}
