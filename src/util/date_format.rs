use chrono::{DateTime, Local};

/// Format an RFC 3339 timestamp as a short local date-time
/// (e.g. "Jan 15, 14:32"); `missing` covers absent or unparseable input.
pub fn format_timestamp(raw: Option<&str>, missing: &str) -> String {
    raw.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| {
            dt.with_timezone(&Local)
                .format("%b %d, %H:%M")
                .to_string()
        })
        .unwrap_or_else(|| missing.to_string())
}

/// Format an RFC 3339 timestamp as a short local date (e.g. "Jan 15, 2024").
pub fn format_date(raw: Option<&str>, missing: &str) -> String {
    raw.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Local).format("%b %d, %Y").to_string())
        .unwrap_or_else(|| missing.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_or_malformed_input_uses_fallback() {
        assert_eq!(format_timestamp(None, "Never"), "Never");
        assert_eq!(format_timestamp(Some("yesterday"), "Never"), "Never");
        assert_eq!(format_date(None, "No due date"), "No due date");
    }

    #[test]
    fn valid_timestamps_format() {
        let formatted = format_date(Some("2024-01-15T14:32:00Z"), "-");
        assert!(formatted.contains("2024"), "got {formatted}");
        assert_ne!(formatted, "-");
    }
}
