//! Validation and filtering
//!
//! Validators decide whether raw form input is acceptable; filters shape the
//! copy of that input that ends up inside a payload.

pub mod filters;
pub mod validators;

pub use filters::{sanitize, sanitize_with_limit};
pub use validators::{
    validate_amount, validate_amount_value, validate_description, validate_handle,
    validate_name, validate_note,
};

use crate::config::UpiConfig;
use crate::core::field::{Field, FieldErrors, ItemForm};

/// Validate a whole form
///
/// Returns only the failed fields; an empty map means the form can be
/// submitted. Price, description and note are checked only when something
/// was typed into them.
pub fn validate_all(form: &ItemForm, config: &UpiConfig) -> FieldErrors {
    let mut errors = FieldErrors::new();

    errors.record(Field::Name, validate_name(&form.name, config));
    errors.record(Field::UpiId, validate_handle(&form.upi_id, config));

    if !form.price.trim().is_empty() {
        errors.record(Field::Price, validate_amount(&form.price, config));
    }
    if !form.description.is_empty() {
        errors.record(Field::Description, validate_description(&form.description, config));
    }
    if !form.payment_note.is_empty() {
        errors.record(Field::PaymentNote, validate_note(&form.payment_note, config));
    }

    errors
}
