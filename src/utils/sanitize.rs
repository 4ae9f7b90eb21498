//! Utilities for sanitizing captured text.
//!
//! Removes control characters from values observed on the wire (HTTP headers,
//! certificate fields) and bounds their length before they reach a report.

use crate::config::MAX_HEADER_VALUE_LENGTH;

/// Removes control characters, keeping tab and any non-ASCII text.
pub fn sanitize_text(value: &str) -> String {
    value
        .chars()
        .filter(|c| {
            let code = *c as u32;
            (code >= 0x20 && code != 0x7F) || code == 0x09
        })
        .collect()
}

/// Sanitizes a header value and truncates it to `MAX_HEADER_VALUE_LENGTH` characters.
///
/// Truncation counts characters, never splitting a UTF-8 sequence.
pub fn sanitize_header_value(value: &str) -> String {
    let sanitized = sanitize_text(value);
    if sanitized.chars().count() > MAX_HEADER_VALUE_LENGTH {
        let truncated: String = sanitized.chars().take(MAX_HEADER_VALUE_LENGTH).collect();
        format!("{truncated}...")
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_text_removes_control_chars() {
        let input = "nginx\x00/1.\x01\x1b25";
        assert_eq!(sanitize_text(input), "nginx/1.25");
    }

    #[test]
    fn test_sanitize_text_keeps_tab_and_unicode() {
        assert_eq!(sanitize_text("a\tb ü"), "a\tb ü");
        assert_eq!(sanitize_text("line\r\nbreak"), "linebreak");
    }

    #[test]
    fn test_sanitize_header_value_short_unchanged() {
        assert_eq!(sanitize_header_value("cloudflare"), "cloudflare");
    }

    #[test]
    fn test_sanitize_header_value_truncates_on_char_boundary() {
        let long = "é".repeat(MAX_HEADER_VALUE_LENGTH + 10);
        let out = sanitize_header_value(&long);
        assert!(out.ends_with("..."));
        assert_eq!(out.chars().count(), MAX_HEADER_VALUE_LENGTH + 3);
    }
}
