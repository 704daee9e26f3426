//! # EZ QR
//!
//! Create, validate and manage UPI payment QR payloads.
//!
//! ## Features
//!
//! - **Field Validation**: Per-field verdicts (handle grammar, amount bounds, length limits)
//! - **Payload Encoding**: Canonical `upi://pay?...` URIs with sanitized free text
//! - **Fixed or Open Amounts**: A zero/absent amount leaves `am` out so the payer chooses
//! - **Consistent Items**: Every edit regenerates the item's QR payload
//! - **Configuration-Based**: Currency, bounds and limits from defaults or YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ezqr::prelude::*;
//!
//! let config = UpiConfig::default();
//! let form = ItemForm::new("Acme Traders", "acme@upi").with_price("250");
//!
//! let errors = validate_all(&form, &config);
//! assert!(errors.is_empty());
//!
//! let uri = encode(&config, "acme@upi", "Acme Traders", Some(250.0), "")?;
//! // upi://pay?cu=INR&pa=acme%40upi&pn=Acme+Traders&am=250.00&tn=Payment+for+Acme+Traders
//! ```

pub mod config;
pub mod core;
pub mod storage;

/// Re-exports of commonly used types and functions
pub mod prelude {
    // === Validation ===
    pub use crate::core::validation::{
        sanitize, validate_all, validate_amount, validate_amount_value, validate_description,
        validate_handle, validate_name, validate_note,
    };

    // === Encoding ===
    pub use crate::core::amount::{format_amount, format_currency, parse_amount};
    pub use crate::core::encoder::{default_note, encode, payment_note, preview};
    pub use crate::core::payload::UpiPayload;
    pub use crate::core::share::{export_file_name, share_text};

    // === Model ===
    pub use crate::core::error::{DecodeError, EncodeError, Reason, StoreError, Verdict};
    pub use crate::core::field::{Field, FieldErrors, ItemForm};
    pub use crate::core::item::{ItemDraft, ItemUpdate, PaymentItem};
    pub use crate::core::service::ItemService;

    // === Storage ===
    #[cfg(feature = "in-memory")]
    pub use crate::storage::InMemoryItemStore;

    // === Config ===
    pub use crate::config::{FieldLimits, UpiConfig};

    // === External dependencies ===
    pub use chrono::{DateTime, Utc};
    pub use uuid::Uuid;
}
