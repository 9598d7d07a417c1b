use chrono::{DateTime, Utc};

/// Formats an article's creation time relative to `now`, the way the listing
/// page displays it ("2 days ago"). Anything older than about a month falls
/// back to the plain date.
pub fn format_relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(timestamp);

    let seconds = elapsed.num_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }

    let minutes = elapsed.num_minutes();
    if minutes < 60 {
        return format_count(minutes, "minute");
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return format_count(hours, "hour");
    }

    let days = elapsed.num_days();
    if days < 31 {
        return format_count(days, "day");
    }

    timestamp.format("%Y-%m-%d").to_string()
}

fn format_count(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(raw: &str) -> DateTime<Utc> {
        raw.parse().unwrap()
    }

    /// Test: each magnitude picks its unit, with singular forms at one.
    #[test]
    fn test_relative_time_units() {
        let now = at("2024-05-10T12:00:00Z");

        assert_eq!(format_relative_time(at("2024-05-10T11:59:30Z"), now), "just now");
        assert_eq!(
            format_relative_time(at("2024-05-10T11:59:00Z"), now),
            "1 minute ago"
        );
        assert_eq!(
            format_relative_time(at("2024-05-10T11:15:00Z"), now),
            "45 minutes ago"
        );
        assert_eq!(
            format_relative_time(at("2024-05-10T09:00:00Z"), now),
            "3 hours ago"
        );
        assert_eq!(
            format_relative_time(at("2024-05-08T12:00:00Z"), now),
            "2 days ago"
        );
    }

    /// Test: old timestamps fall back to the plain date.
    #[test]
    fn test_relative_time_falls_back_to_date() {
        let now = at("2024-05-10T12:00:00Z");
        assert_eq!(
            format_relative_time(at("2024-01-01T00:00:00Z"), now),
            "2024-01-01"
        );
    }

    /// Test: a clock-skewed future timestamp reads as "just now" rather
    /// than a negative count.
    #[test]
    fn test_relative_time_future() {
        let now = at("2024-05-10T12:00:00Z");
        assert_eq!(
            format_relative_time(at("2024-05-10T12:05:00Z"), now),
            "just now"
        );
    }
}
