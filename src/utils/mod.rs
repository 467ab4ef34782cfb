// Sun Oct 18 2026 - Alex

#[cfg(test)]
pub mod testing;

/// Shortens `s` to at most `max_chars` characters for log output.
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    if max_chars >= 3 {
        let head: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max_chars).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_untouched() {
        assert_eq!(truncate_string("ab+c", 10), "ab+c");
    }

    #[test]
    fn test_truncate_long() {
        assert_eq!(truncate_string("abcdefghij", 6), "abc...");
        assert_eq!(truncate_string("abcdef", 2), "ab");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate_string("ééééééé", 5), "éé...");
    }
}
