// ABOUTME: Shared utility functions for XPerience settings
// ABOUTME: Boolean encoding for integer settings and display text helpers

/// Encode a switch state the way integer settings store it
pub fn bool_to_setting(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}

/// Decode an integer setting into a switch state. Only `1` counts as on.
pub fn setting_to_bool(value: i64) -> bool {
    value == 1
}

/// Upper-case the first character and lower-case the rest ("OFFICIAL" -> "Official")
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// Treat empty and whitespace-only values as absent
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_encoding() {
        assert_eq!(bool_to_setting(true), 1);
        assert_eq!(bool_to_setting(false), 0);
        assert!(setting_to_bool(1));
        assert!(!setting_to_bool(0));
        assert!(!setting_to_bool(2));
        assert!(!setting_to_bool(-1));
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("official"), "Official");
        assert_eq!(capitalize_first("COMMUNITY"), "Community");
        assert_eq!(capitalize_first("x"), "X");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("Pixel".to_string())), Some("Pixel".to_string()));
        assert_eq!(non_blank(Some("   ".to_string())), None);
        assert_eq!(non_blank(Some(String::new())), None);
        assert_eq!(non_blank(None), None);
    }
}
