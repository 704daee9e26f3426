//! Core module: field validation, payload encoding and the item model

pub mod amount;
pub mod encoder;
pub mod error;
pub mod field;
pub mod item;
pub mod payload;
pub mod service;
pub mod share;
pub mod validation;

pub use encoder::{default_note, encode, payment_note, preview};
pub use error::{DecodeError, EncodeError, Reason, StoreError, Verdict};
pub use field::{Field, FieldErrors, ItemForm};
pub use item::{ItemDraft, ItemUpdate, PaymentItem};
pub use payload::UpiPayload;
pub use service::ItemService;
pub use validation::validate_all;
