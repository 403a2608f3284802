/// Parse a positive count such as a page number or page size.
pub fn parse_positive(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|value| *value >= 1)
}

/// Parse a non-negative count such as a record total.
pub fn parse_count(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok()
}

/// Parse a boolean flag the way environment switches are usually written.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_rejects_zero() {
        assert_eq!(parse_positive("5"), Some(5));
        assert_eq!(parse_positive("0"), None);
        assert_eq!(parse_positive(""), None);
    }

    #[test]
    fn count_accepts_zero() {
        assert_eq!(parse_count("0"), Some(0));
        assert_eq!(parse_count(" 42 "), Some(42));
        assert_eq!(parse_count("-3"), None);
    }

    #[test]
    fn flags() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
