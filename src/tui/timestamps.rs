use chrono::{DateTime, Datelike, Utc};

/// Format a raw transcript timestamp for display
///
/// RFC 3339 values get a tiered display:
/// - Relative for <7 days: "2h ago", "3d ago"
/// - Absolute for ≥7 days: "Jan 15", "Dec 3, 2024"
///
/// Anything else is shown as-is.
pub fn format_timestamp(raw: &str) -> String {
    format_timestamp_at(raw, Utc::now())
}

pub fn format_timestamp_at(raw: &str, now: DateTime<Utc>) -> String {
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(parsed) => {
            let timestamp = parsed.with_timezone(&Utc);
            let duration = now.signed_duration_since(timestamp);
            if duration.num_days() < 7 {
                format_relative(duration.num_seconds())
            } else {
                format_absolute(&timestamp, &now)
            }
        }
        Err(_) => raw.to_string(),
    }
}

fn format_relative(seconds: i64) -> String {
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{}d ago", days)
    } else if hours > 0 {
        format!("{}h ago", hours)
    } else if minutes > 0 {
        format!("{}m ago", minutes)
    } else {
        "just now".to_string()
    }
}

fn format_absolute(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    if timestamp.year() == now.year() {
        timestamp.format("%b %-d").to_string()
    } else {
        timestamp.format("%b %-d, %Y").to_string()
    }
}
