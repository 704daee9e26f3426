//! Text filters applied before user input is embedded in a payload
//!
//! Filters never touch what the user sees in the form; they only shape the
//! copy that goes into the QR payload.

use regex::Regex;
use std::sync::OnceLock;

/// Default length budget of sanitized text
pub const SANITIZED_MAX_LEN: usize = 100;

fn angle_brackets() -> &'static Regex {
    static ANGLE_BRACKETS: OnceLock<Regex> = OnceLock::new();
    ANGLE_BRACKETS.get_or_init(|| Regex::new(r"[<>]").expect("valid angle bracket pattern"))
}

fn disallowed_chars() -> &'static Regex {
    static DISALLOWED: OnceLock<Regex> = OnceLock::new();
    // ASCII word characters, any whitespace, dot and hyphen survive
    DISALLOWED.get_or_init(|| Regex::new(r"[^A-Za-z0-9_\s.\-]").expect("valid whitelist pattern"))
}

/// Sanitize free text with the default length budget
pub fn sanitize(text: &str) -> String {
    sanitize_with_limit(text, SANITIZED_MAX_LEN)
}

/// Trim, strip angle brackets, strip everything outside the whitelist, then
/// truncate to `max_len` characters
///
/// Stripping happens before truncation so removed characters never count
/// against the budget.
pub fn sanitize_with_limit(text: &str, max_len: usize) -> String {
    let trimmed = text.trim();
    let without_markup = angle_brackets().replace_all(trimmed, "");
    let whitelisted = disallowed_chars().replace_all(&without_markup, "");
    whitelisted.chars().take(max_len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // === sanitize() ===

    #[test]
    fn test_sanitize_plain_text_unchanged() {
        assert_eq!(sanitize("Acme Traders"), "Acme Traders");
        assert_eq!(sanitize("Order no. 12-B_x"), "Order no. 12-B_x");
    }

    #[test]
    fn test_sanitize_trims() {
        assert_eq!(sanitize("   Chai stall  "), "Chai stall");
    }

    #[test]
    fn test_sanitize_strips_script_tag() {
        let cleaned = sanitize("<script>alert(1)</script>");
        assert_eq!(cleaned, "scriptalert1script");
        assert!(!cleaned.contains('<'));
        assert!(!cleaned.contains('('));
        assert!(!cleaned.contains('/'));
    }

    #[test]
    fn test_sanitize_strips_query_metacharacters() {
        assert_eq!(sanitize("a&b=c?d#e%f+g"), "abcdefg");
    }

    #[test]
    fn test_sanitize_all_symbols_becomes_empty() {
        assert_eq!(sanitize("@#$%^&*()"), "");
        assert_eq!(sanitize("   "), "");
    }

    #[test]
    fn test_sanitize_strips_non_ascii_letters() {
        assert_eq!(sanitize("Café ₹50"), "Caf 50");
    }

    #[test]
    fn test_sanitize_strips_before_truncating() {
        let input = format!("{}{}", "!".repeat(50), "a".repeat(120));
        let cleaned = sanitize(&input);
        assert_eq!(cleaned.len(), 100);
        assert!(cleaned.chars().all(|c| c == 'a'));
    }

    #[test]
    fn test_sanitize_with_custom_limit() {
        assert_eq!(sanitize_with_limit("abcdefgh", 3), "abc");
    }

    #[test]
    fn test_sanitize_keeps_inner_space_after_stripped_prefix() {
        // trim runs first, so a leading symbol leaves its following space
        assert_eq!(sanitize("# hello"), " hello");
    }
}
