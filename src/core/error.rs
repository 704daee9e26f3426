//! Typed error handling for the payload pipeline
//!
//! Two very different kinds of failure live here:
//!
//! - [`Reason`]: an expected, field-scoped verdict produced by the validators.
//!   Forms are incomplete most of the time, so these are plain data.
//! - [`EncodeError`], [`DecodeError`], [`StoreError`]: hard failures of an
//!   operation that must not produce a partial result.
//!
//! # Example
//!
//! ```rust,ignore
//! use ezqr::prelude::*;
//!
//! match encode(&config, "acme", "Acme", None, "") {
//!     Ok(uri) => println!("{uri}"),
//!     Err(EncodeError::InvalidHandle { reason }) => {
//!         eprintln!("bad handle: {}", reason.code());
//!     }
//!     Err(e) => eprintln!("other: {e}"),
//! }
//! ```

use crate::config::UpiConfig;
use crate::core::field::{Field, FieldErrors};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

// =============================================================================
// Field verdicts
// =============================================================================

/// Why a single field was rejected
///
/// At most one reason is reported per field: the first rule it violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Reason {
    /// Empty (after trim) where a value is mandatory
    #[error("This field is required")]
    RequiredField,

    /// Longer than the configured limit for the field
    #[error("Value is too long")]
    TooLong,

    /// Handle does not match `local@domain`
    #[error("Invalid UPI ID format (e.g., user@bank)")]
    InvalidFormat,

    /// Not a finite, non-negative number
    #[error("Please enter a valid amount")]
    InvalidAmount,

    /// Positive but below the configured minimum
    #[error("Amount is below the minimum")]
    AmountTooLow,

    /// Above the configured maximum
    #[error("Amount is above the maximum")]
    AmountTooHigh,

    /// Payee name is empty once sanitized
    #[error("Payee name is required")]
    MissingPayeeName,
}

impl Reason {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Reason::RequiredField => "REQUIRED_FIELD",
            Reason::TooLong => "TOO_LONG",
            Reason::InvalidFormat => "INVALID_FORMAT",
            Reason::InvalidAmount => "INVALID_AMOUNT",
            Reason::AmountTooLow => "AMOUNT_TOO_LOW",
            Reason::AmountTooHigh => "AMOUNT_TOO_HIGH",
            Reason::MissingPayeeName => "MISSING_PAYEE_NAME",
        }
    }

    /// Human-readable message for `field`, with the configured bounds filled in
    pub fn message(&self, field: Field, config: &UpiConfig) -> String {
        match self {
            Reason::TooLong => {
                let (label, max) = match field {
                    Field::UpiId => ("UPI ID", config.limits.handle),
                    Field::Name => ("Name", config.limits.name),
                    Field::Description => ("Description", config.limits.description),
                    Field::PaymentNote => ("Payment note", config.limits.note),
                    Field::Price => return self.to_string(),
                };
                format!("{label} must be at most {max} characters")
            }
            Reason::AmountTooLow => format!("Minimum amount is ₹{}", config.min_amount),
            Reason::AmountTooHigh => format!("Maximum amount is ₹{}", config.max_amount),
            _ => self.to_string(),
        }
    }
}

/// Outcome of validating one field
pub type Verdict = Result<(), Reason>;

// =============================================================================
// Encoder errors
// =============================================================================

/// The encoder refused to build a payload
///
/// A correctly wired caller validates first, so seeing one of these means the
/// caller skipped that step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("invalid UPI handle: {reason}")]
    InvalidHandle { reason: Reason },

    #[error("invalid amount: {reason}")]
    InvalidAmount { reason: Reason },

    #[error("payee name is required")]
    MissingPayeeName,
}

impl EncodeError {
    /// The validator reason behind this failure
    pub fn reason(&self) -> Reason {
        match self {
            EncodeError::InvalidHandle { reason } | EncodeError::InvalidAmount { reason } => {
                *reason
            }
            EncodeError::MissingPayeeName => Reason::MissingPayeeName,
        }
    }
}

// =============================================================================
// Decoder errors
// =============================================================================

/// A string could not be read back as a UPI payment payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("not a UPI payment URI (expected prefix '{expected}?')")]
    UnsupportedScheme { expected: String },

    #[error("missing required parameter '{0}'")]
    MissingParameter(&'static str),

    #[error("amount '{0}' is not a decimal number")]
    InvalidAmount(String),
}

// =============================================================================
// Store errors
// =============================================================================

/// Failures of an item store operation
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("payment item with id '{id}' not found")]
    NotFound { id: Uuid },

    #[error("validation failed: {0}")]
    Invalid(FieldErrors),

    #[error("failed to generate QR data: {0}")]
    Encode(#[from] EncodeError),

    #[error("item store lock poisoned: {0}")]
    Poisoned(String),
}

impl StoreError {
    /// Machine-readable code, mirroring [`Reason::code`]
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::NotFound { .. } => "ITEM_NOT_FOUND",
            StoreError::Invalid(_) => "VALIDATION_ERROR",
            StoreError::Encode(_) => "ENCODE_ERROR",
            StoreError::Poisoned(_) => "STORAGE_ERROR",
        }
    }
}
