//! Per-field validators
//!
//! Each validator takes one raw field value and returns a [`Verdict`]:
//! `Ok(())` or the first rule the value breaks. Malformed input is an
//! ordinary outcome here, never a panic.

use crate::config::UpiConfig;
use crate::core::amount::parse_leading_number;
use crate::core::error::{Reason, Verdict};
use regex::Regex;
use std::sync::OnceLock;
use validator::ValidateLength;

/// Handle grammar: `local-part@domain-part`
pub const HANDLE_PATTERN: &str = r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+$";

fn handle_regex() -> &'static Regex {
    static HANDLE_REGEX: OnceLock<Regex> = OnceLock::new();
    HANDLE_REGEX.get_or_init(|| Regex::new(HANDLE_PATTERN).expect("valid handle pattern"))
}

fn within(text: &str, max: usize) -> bool {
    text.validate_length(None, Some(max as u64), None)
}

/// Validator: UPI handle (`name@bank`)
///
/// Whitespace is trimmed before every check.
pub fn validate_handle(raw: &str, config: &UpiConfig) -> Verdict {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Reason::RequiredField);
    }
    if !within(trimmed, config.limits.handle) {
        return Err(Reason::TooLong);
    }
    if !handle_regex().is_match(trimmed) {
        return Err(Reason::InvalidFormat);
    }
    Ok(())
}

/// Validator: user-typed amount
///
/// Empty input is valid (the payer will enter the amount).
pub fn validate_amount(raw: &str, config: &UpiConfig) -> Verdict {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    match parse_leading_number(trimmed) {
        Some(value) => validate_amount_value(value, config),
        None => Err(Reason::InvalidAmount),
    }
}

/// Validator: already-parsed amount
///
/// Zero means "no amount" and skips the minimum bound.
pub fn validate_amount_value(value: f64, config: &UpiConfig) -> Verdict {
    if !value.is_finite() || value < 0.0 {
        return Err(Reason::InvalidAmount);
    }
    if value > 0.0 && value < config.min_amount {
        return Err(Reason::AmountTooLow);
    }
    if value > config.max_amount {
        return Err(Reason::AmountTooHigh);
    }
    Ok(())
}

/// Validator: payee/item name, required
pub fn validate_name(raw: &str, config: &UpiConfig) -> Verdict {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Reason::RequiredField);
    }
    if !within(trimmed, config.limits.name) {
        return Err(Reason::TooLong);
    }
    Ok(())
}

/// Validator: optional description
pub fn validate_description(raw: &str, config: &UpiConfig) -> Verdict {
    if within(raw, config.limits.description) {
        Ok(())
    } else {
        Err(Reason::TooLong)
    }
}

/// Validator: optional payment note
pub fn validate_note(raw: &str, config: &UpiConfig) -> Verdict {
    if within(raw, config.limits.note) {
        Ok(())
    } else {
        Err(Reason::TooLong)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> UpiConfig {
        UpiConfig::default()
    }

    // === validate_handle() ===

    #[test]
    fn test_handle_valid() {
        assert!(validate_handle("acme@upi", &config()).is_ok());
        assert!(validate_handle("a.b-c_1@my-bank.co", &config()).is_ok());
    }

    #[test]
    fn test_handle_trimmed_before_checks() {
        assert!(validate_handle("  acme@upi \n", &config()).is_ok());
    }

    #[test]
    fn test_handle_empty_is_required() {
        assert_eq!(validate_handle("", &config()), Err(Reason::RequiredField));
        assert_eq!(validate_handle("   ", &config()), Err(Reason::RequiredField));
    }

    #[test]
    fn test_handle_without_at_is_invalid() {
        assert_eq!(validate_handle("abc", &config()), Err(Reason::InvalidFormat));
    }

    #[test]
    fn test_handle_bad_characters_invalid() {
        assert_eq!(validate_handle("ac me@upi", &config()), Err(Reason::InvalidFormat));
        assert_eq!(validate_handle("acme@up_i", &config()), Err(Reason::InvalidFormat));
        assert_eq!(validate_handle("a@b@c", &config()), Err(Reason::InvalidFormat));
        assert_eq!(validate_handle("@upi", &config()), Err(Reason::InvalidFormat));
        assert_eq!(validate_handle("acme@", &config()), Err(Reason::InvalidFormat));
    }

    #[test]
    fn test_handle_length_checked_before_format() {
        let long = "x".repeat(51);
        assert_eq!(validate_handle(&long, &config()), Err(Reason::TooLong));

        let at_limit = format!("{}@upi", "a".repeat(46));
        assert_eq!(at_limit.len(), 50);
        assert!(validate_handle(&at_limit, &config()).is_ok());
    }

    // === validate_amount() ===

    #[test]
    fn test_amount_empty_is_valid() {
        assert!(validate_amount("", &config()).is_ok());
        assert!(validate_amount("  ", &config()).is_ok());
    }

    #[test]
    fn test_amount_zero_is_valid() {
        assert!(validate_amount("0", &config()).is_ok());
        assert!(validate_amount("0.00", &config()).is_ok());
    }

    #[test]
    fn test_amount_below_minimum() {
        assert_eq!(validate_amount("0.5", &config()), Err(Reason::AmountTooLow));
        assert_eq!(validate_amount("0.99", &config()), Err(Reason::AmountTooLow));
    }

    #[test]
    fn test_amount_bounds_inclusive() {
        assert!(validate_amount("1", &config()).is_ok());
        assert!(validate_amount("100000", &config()).is_ok());
        assert_eq!(validate_amount("100000.01", &config()), Err(Reason::AmountTooHigh));
    }

    #[test]
    fn test_amount_not_a_number() {
        assert_eq!(validate_amount("abc", &config()), Err(Reason::InvalidAmount));
        assert_eq!(validate_amount("-5", &config()), Err(Reason::InvalidAmount));
        assert_eq!(validate_amount("Infinity", &config()), Err(Reason::InvalidAmount));
    }

    #[test]
    fn test_amount_value_nan_invalid() {
        assert_eq!(validate_amount_value(f64::NAN, &config()), Err(Reason::InvalidAmount));
    }

    #[test]
    fn test_amount_respects_configured_bounds() {
        let config = UpiConfig {
            min_amount: 10.0,
            max_amount: 50.0,
            ..UpiConfig::default()
        };
        assert_eq!(validate_amount("5", &config), Err(Reason::AmountTooLow));
        assert_eq!(validate_amount("51", &config), Err(Reason::AmountTooHigh));
        assert!(validate_amount("10", &config).is_ok());
    }

    // === validate_name() ===

    #[test]
    fn test_name_required() {
        assert_eq!(validate_name("", &config()), Err(Reason::RequiredField));
        assert_eq!(validate_name(" \t ", &config()), Err(Reason::RequiredField));
    }

    #[test]
    fn test_name_length_after_trim() {
        let padded = format!("  {}  ", "n".repeat(100));
        assert!(validate_name(&padded, &config()).is_ok());
        assert_eq!(validate_name(&"n".repeat(101), &config()), Err(Reason::TooLong));
    }

    #[test]
    fn test_name_counts_characters_not_bytes() {
        let devanagari = "क".repeat(100);
        assert!(devanagari.len() > 100);
        assert!(validate_name(&devanagari, &config()).is_ok());
    }

    // === validate_description() / validate_note() ===

    #[test]
    fn test_optional_text_empty_valid() {
        assert!(validate_description("", &config()).is_ok());
        assert!(validate_note("", &config()).is_ok());
    }

    #[test]
    fn test_description_limit() {
        assert!(validate_description(&"d".repeat(200), &config()).is_ok());
        assert_eq!(
            validate_description(&"d".repeat(201), &config()),
            Err(Reason::TooLong)
        );
    }

    #[test]
    fn test_note_limit() {
        assert!(validate_note(&"n".repeat(100), &config()).is_ok());
        assert_eq!(validate_note(&"n".repeat(101), &config()), Err(Reason::TooLong));
    }
}
