//! UPI payment URI encoding
//!
//! Turns a field set into the canonical `upi://pay?...` payload:
//!
//! ```text
//! upi://pay?cu=INR&pa=acme%40upi&pn=Acme+Traders&am=250.00&tn=Payment+for+Acme+Traders
//! ```
//!
//! Parameters always appear in the order `cu`, `pa`, `pn`, `am`, `tn`, and the
//! query is form-urlencoded. `am` is present only for a fixed, non-zero
//! amount: its absence tells the payer's app to ask for one.

use crate::config::UpiConfig;
use crate::core::amount::{format_amount, parse_amount};
use crate::core::error::EncodeError;
use crate::core::field::ItemForm;
use crate::core::validation::{sanitize, sanitize_with_limit, validate_amount_value, validate_handle};
use url::form_urlencoded::Serializer;

/// Prefix of the note generated when none is supplied
pub const DEFAULT_NOTE_PREFIX: &str = "Payment for ";

/// Note used when the caller supplies none
pub fn default_note(name: &str) -> String {
    format!("{DEFAULT_NOTE_PREFIX}{}", sanitize(name))
}

/// Note to show the payer: the sanitized custom note, or the default one
pub fn payment_note(name: &str, custom: &str) -> String {
    if custom.trim().is_empty() {
        default_note(name)
    } else {
        sanitize(custom)
    }
}

/// Build the payment URI for a payee
///
/// Re-validates the handle and amount itself instead of trusting the caller.
/// `amount` of `None` or `Some(0.0)` produces a payload without `am`.
pub fn encode(
    config: &UpiConfig,
    handle: &str,
    name: &str,
    amount: Option<f64>,
    note: &str,
) -> Result<String, EncodeError> {
    validate_handle(handle, config).map_err(|reason| EncodeError::InvalidHandle { reason })?;

    let amount = amount.unwrap_or(0.0);
    validate_amount_value(amount, config).map_err(|reason| EncodeError::InvalidAmount { reason })?;

    let limit = config.limits.sanitized;
    let payee_name = sanitize_with_limit(name, limit);
    if payee_name.trim().is_empty() {
        return Err(EncodeError::MissingPayeeName);
    }

    let mut note = sanitize_with_limit(note, limit);
    if note.trim().is_empty() {
        note = format!("{DEFAULT_NOTE_PREFIX}{payee_name}");
    }

    let mut query = Serializer::new(String::new());
    query.append_pair("cu", &config.currency);
    query.append_pair("pa", handle.trim());
    query.append_pair("pn", &payee_name);
    if amount > 0.0 {
        query.append_pair("am", &format_amount(amount));
    }
    query.append_pair("tn", &note);

    Ok(format!("{}?{}", config.scheme, query.finish()))
}

/// Best-effort payload for a form that is still being filled in
///
/// Never fails: parameters whose input is missing are left out, except `cu`.
/// Unlike [`encode`] nothing is validated, so the result is only fit for a
/// live preview.
pub fn preview(form: &ItemForm, config: &UpiConfig) -> String {
    let limit = config.limits.sanitized;
    let mut query = Serializer::new(String::new());
    query.append_pair("cu", &config.currency);

    let handle = form.upi_id.trim();
    if !handle.is_empty() {
        query.append_pair("pa", handle);
    }

    let payee_name = sanitize_with_limit(&form.name, limit);
    let has_name = !payee_name.trim().is_empty();
    if has_name {
        query.append_pair("pn", &payee_name);
    }

    let amount = parse_amount(&form.price);
    if amount > 0.0 {
        query.append_pair("am", &format_amount(amount));
    }

    let note = sanitize_with_limit(&form.payment_note, limit);
    if !note.trim().is_empty() {
        query.append_pair("tn", &note);
    } else if has_name {
        query.append_pair("tn", &format!("{DEFAULT_NOTE_PREFIX}{payee_name}"));
    }

    format!("{}?{}", config.scheme, query.finish())
}
