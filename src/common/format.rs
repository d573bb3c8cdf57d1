use chrono::{DateTime, Utc};
use colored::*;

/// Format a retention period with appropriate plural
pub fn format_days(days: u32) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}

/// Format folder count with appropriate plural
pub fn format_folder_count(count: usize) -> String {
    if count == 1 {
        "1 folder".to_string()
    } else {
        format!("{} folders", count)
    }
}

/// Format screenshot count with appropriate plural
pub fn format_screenshot_count(count: u64) -> String {
    if count == 1 {
        "1 screenshot".to_string()
    } else {
        format!("{} screenshots", count)
    }
}

/// Format a timestamp as a rough "time ago" string
pub fn format_relative(then: DateTime<Utc>) -> String {
    let elapsed = Utc::now().signed_duration_since(then);
    let secs = elapsed.num_seconds();

    if secs < 60 {
        "just now".to_string()
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else if secs < 86400 {
        format!("{}h ago", secs / 3600)
    } else {
        format!("{}d ago", secs / 86400)
    }
}

/// Colorize a retention period by how aggressive it is
pub fn format_days_colored(days: u32) -> ColoredString {
    let s = format_days(days);
    if days <= 7 {
        s.red()
    } else if days <= 30 {
        s.yellow()
    } else {
        s.green()
    }
}

/// Print a section header
pub fn print_header(title: &str) {
    println!();
    println!("{}", title.bold().underline());
    println!();
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {}: {}", key.dimmed(), value);
}

/// Truncate a string to max length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_format_days() {
        assert_eq!(format_days(1), "1 day");
        assert_eq!(format_days(30), "30 days");
        assert_eq!(format_days(365), "365 days");
    }

    #[test]
    fn test_format_folder_count() {
        assert_eq!(format_folder_count(0), "0 folders");
        assert_eq!(format_folder_count(1), "1 folder");
        assert_eq!(format_folder_count(7), "7 folders");
    }

    #[test]
    fn test_format_relative() {
        assert_eq!(format_relative(Utc::now()), "just now");
        assert_eq!(format_relative(Utc::now() - Duration::minutes(5)), "5m ago");
        assert_eq!(format_relative(Utc::now() - Duration::hours(3)), "3h ago");
        assert_eq!(format_relative(Utc::now() - Duration::days(2)), "2d ago");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
    }
}
