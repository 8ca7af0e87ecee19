use chrono::{DateTime, Utc};

/// Docker-style human duration ("About an hour", "3 days", ...).
pub fn human_duration(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let minutes = seconds / 60;
    let hours = minutes / 60;

    if seconds < 1 {
        "Less than a second".to_string()
    } else if seconds == 1 {
        "1 second".to_string()
    } else if seconds < 60 {
        format!("{} seconds", seconds)
    } else if minutes == 1 {
        "About a minute".to_string()
    } else if minutes < 60 {
        format!("{} minutes", minutes)
    } else if hours == 1 {
        "About an hour".to_string()
    } else if hours < 48 {
        format!("{} hours", hours)
    } else if hours < 24 * 7 * 2 {
        format!("{} days", hours / 24)
    } else if hours < 24 * 30 * 2 {
        format!("{} weeks", hours / 24 / 7)
    } else if hours < 24 * 365 * 2 {
        format!("{} months", hours / 24 / 30)
    } else {
        format!("{} years", hours / 24 / 365)
    }
}

pub fn uptime_since(created: i64, now: DateTime<Utc>) -> String {
    human_duration(now.timestamp() - created)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}", value)
}

/// Parses a `ps`-style percentage. Anything that isn't a finite number
/// counts as unmeasured.
pub fn parse_percent(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_follow_docker_wording() {
        assert_eq!(human_duration(0), "Less than a second");
        assert_eq!(human_duration(-5), "Less than a second");
        assert_eq!(human_duration(1), "1 second");
        assert_eq!(human_duration(42), "42 seconds");
        assert_eq!(human_duration(90), "About a minute");
        assert_eq!(human_duration(15 * 60), "15 minutes");
        assert_eq!(human_duration(3600 + 59), "About an hour");
        assert_eq!(human_duration(5 * 3600), "5 hours");
        assert_eq!(human_duration(3 * 86400), "3 days");
        assert_eq!(human_duration(21 * 86400), "3 weeks");
        assert_eq!(human_duration(90 * 86400), "3 months");
        assert_eq!(human_duration(3 * 365 * 86400), "3 years");
    }

    #[test]
    fn uptime_is_relative_to_now() {
        let now = DateTime::<Utc>::from_timestamp(10_000, 0).unwrap();
        assert_eq!(uptime_since(10_000 - 7200, now), "2 hours");
    }

    #[test]
    fn percent_parsing_rejects_garbage() {
        assert_eq!(parse_percent("1.5"), Some(1.5));
        assert_eq!(parse_percent(" 0.0 "), Some(0.0));
        assert_eq!(parse_percent(""), None);
        assert_eq!(parse_percent("n/a"), None);
        assert_eq!(parse_percent("NaN"), None);
        assert_eq!(parse_percent("inf"), None);
        assert_eq!(format_percent(3.14159), "3.1");
    }
}
