pub fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Formats a countdown as MM:SS (the 90-minute budget shows as 90:00).
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_no_truncation() {
        let s = "Short string";
        let result = truncate_string(s, 20);
        assert_eq!(result, "Short string");
    }

    #[test]
    fn test_truncate_string_with_truncation() {
        let s = "This is a very long string that should be truncated";
        let result = truncate_string(s, 20);
        assert_eq!(result, "This is a very lo...");
        assert!(result.chars().count() <= 20);
    }

    #[test]
    fn test_truncate_string_multibyte() {
        let s = "人工智能训练师理论与实操知识";
        let result = truncate_string(s, 8);
        assert_eq!(result, "人工智能训...");
    }

    #[test]
    fn test_truncate_string_empty() {
        assert_eq!(truncate_string("", 20), "");
    }

    #[test]
    fn test_format_time_full_budget() {
        assert_eq!(format_time(5400), "90:00");
    }

    #[test]
    fn test_format_time_minutes_and_seconds() {
        assert_eq!(format_time(61), "01:01");
        assert_eq!(format_time(9), "00:09");
        assert_eq!(format_time(0), "00:00");
    }
}
