//! Display Formatting
//!
//! Date and percentage helpers shared by the terminal and browser renderers.

use chrono::{DateTime, NaiveDateTime};

/// Placeholder shown for missing values
pub const EMPTY: &str = "-";

/// Parse a backend timestamp.
///
/// The backend writes naive ISO 8601 (`2024-03-01T10:15:00.123456`) but
/// RFC 3339 with an offset is accepted too and shown in its own offset.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// `dd/mm/yyyy, HH:MM`, or `-` when missing. Unparseable input is echoed.
pub fn format_date(value: Option<&str>) -> String {
    format_with(value, "%d/%m/%Y, %H:%M")
}

/// `HH:MM`, or `-` when missing. Unparseable input is echoed.
pub fn format_time(value: Option<&str>) -> String {
    format_with(value, "%H:%M")
}

fn format_with(value: Option<&str>, pattern: &str) -> String {
    match value {
        None => EMPTY.to_string(),
        Some(s) if s.trim().is_empty() => EMPTY.to_string(),
        Some(s) => parse_timestamp(s)
            .map(|dt| dt.format(pattern).to_string())
            .unwrap_or_else(|| s.to_string()),
    }
}

/// Share of successful scans, rounded to a whole percent. Zero scans is 0%.
pub fn success_rate(successful: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    (successful as f64 / total as f64 * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_naive_iso() {
        assert_eq!(
            format_date(Some("2024-03-01T10:15:42.123456")),
            "01/03/2024, 10:15"
        );
    }

    #[test]
    fn test_format_date_with_offset() {
        assert_eq!(format_date(Some("2024-03-01T10:15:00+02:00")), "01/03/2024, 10:15");
    }

    #[test]
    fn test_format_missing_and_garbage() {
        assert_eq!(format_date(None), "-");
        assert_eq!(format_time(Some("")), "-");
        assert_eq!(format_time(Some("yesterday")), "yesterday");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(Some("2024-03-01 23:05:00")), "23:05");
    }

    #[test]
    fn test_success_rate() {
        assert_eq!(success_rate(0, 0), 0);
        assert_eq!(success_rate(3, 4), 75);
        assert_eq!(success_rate(2, 3), 67);
        assert_eq!(success_rate(5, 5), 100);
    }
}
