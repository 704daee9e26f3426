//! Payment items and their lifecycle
//!
//! A [`PaymentItem`] owns the QR payload derived from its fields. Fields are
//! private so the payload can only change through [`PaymentItem::apply`],
//! which always recomputes it.

use crate::config::UpiConfig;
use crate::core::amount::{format_amount, format_currency, parse_amount};
use crate::core::encoder::{default_note, encode};
use crate::core::error::EncodeError;
use crate::core::field::ItemForm;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A zero price means "payer enters the amount"; anything else is kept for
/// the encoder to judge
fn normalize_price(price: Option<f64>) -> Option<f64> {
    price.filter(|value| *value != 0.0)
}

/// Cleaned-up field set ready to become an item
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    pub price: Option<f64>,
    pub payment_note: String,
    pub upi_id: String,
}

impl ItemDraft {
    /// Trim every text field and parse the price leniently
    pub fn from_form(form: &ItemForm) -> Self {
        Self {
            name: form.name.trim().to_string(),
            description: form.description.trim().to_string(),
            price: normalize_price(Some(parse_amount(&form.price))),
            payment_note: form.payment_note.trim().to_string(),
            upi_id: form.upi_id.trim().to_string(),
        }
    }
}

/// Partial edit of an item; `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    /// `Some(None)` clears a fixed amount
    pub price: Option<Option<f64>>,
    pub payment_note: Option<String>,
    pub upi_id: Option<String>,
    pub is_active: Option<bool>,
}

impl ItemUpdate {
    /// Replace every editable field with the contents of an edit form
    pub fn from_form(form: &ItemForm) -> Self {
        let draft = ItemDraft::from_form(form);
        Self {
            name: Some(draft.name),
            description: Some(draft.description),
            price: Some(draft.price),
            payment_note: Some(draft.payment_note),
            upi_id: Some(draft.upi_id),
            is_active: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn price(mut self, price: Option<f64>) -> Self {
        self.price = Some(price);
        self
    }

    pub fn payment_note(mut self, note: impl Into<String>) -> Self {
        self.payment_note = Some(note.into());
        self
    }

    pub fn upi_id(mut self, upi_id: impl Into<String>) -> Self {
        self.upi_id = Some(upi_id.into());
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

/// A saved payment QR code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentItem {
    id: Uuid,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    price: Option<f64>,
    payment_note: String,
    upi_id: String,
    qr_code_data: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl PaymentItem {
    /// Create an active item, generating its note (if empty) and payload
    pub fn from_draft(draft: ItemDraft, config: &UpiConfig) -> Result<Self, EncodeError> {
        let ItemDraft {
            name,
            description,
            price,
            payment_note,
            upi_id,
        } = draft;

        let payment_note = if payment_note.trim().is_empty() {
            default_note(&name)
        } else {
            payment_note
        };
        let price = normalize_price(price);
        let qr_code_data = encode(config, &upi_id, &name, price, &payment_note)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            description,
            price,
            payment_note,
            upi_id: upi_id.trim().to_string(),
            qr_code_data,
            is_active: true,
            created_at: Utc::now(),
        })
    }

    /// Apply an edit and regenerate the payload in the same step
    ///
    /// The payload is recomputed on every call, whichever fields changed.
    /// On error the item is left exactly as it was.
    pub fn apply(&mut self, update: ItemUpdate, config: &UpiConfig) -> Result<(), EncodeError> {
        let mut next = self.clone();
        let had_default_note = self.payment_note == default_note(&self.name);

        if let Some(name) = update.name {
            next.name = name.trim().to_string();
        }
        if let Some(description) = update.description {
            next.description = description.trim().to_string();
        }
        if let Some(price) = update.price {
            next.price = normalize_price(price);
        }
        if let Some(upi_id) = update.upi_id {
            next.upi_id = upi_id.trim().to_string();
        }
        if let Some(is_active) = update.is_active {
            next.is_active = is_active;
        }

        match update.payment_note {
            Some(note) if !note.trim().is_empty() => next.payment_note = note.trim().to_string(),
            Some(_) => next.payment_note = default_note(&next.name),
            None if had_default_note => next.payment_note = default_note(&next.name),
            None => {}
        }

        next.regenerate(config)?;
        *self = next;
        Ok(())
    }

    /// Recompute the payload from the current fields
    ///
    /// Used after loading items from storage, where the payload on disk may
    /// predate a configuration change.
    pub fn regenerate(&mut self, config: &UpiConfig) -> Result<(), EncodeError> {
        self.qr_code_data = encode(
            config,
            &self.upi_id,
            &self.name,
            self.price,
            &self.payment_note,
        )?;
        Ok(())
    }

    /// Flip whether the code should be honored; nothing else changes
    pub fn toggle_active(&mut self) {
        self.is_active = !self.is_active;
    }

    /// Current fields as an edit form
    pub fn to_form(&self) -> ItemForm {
        ItemForm {
            name: self.name.clone(),
            upi_id: self.upi_id.clone(),
            price: self.price.map(format_amount).unwrap_or_default(),
            description: self.description.clone(),
            payment_note: self.payment_note.clone(),
        }
    }

    /// Price for display, `None` when the payer enters the amount
    pub fn price_display(&self) -> Option<String> {
        self.price.map(format_currency)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Option<f64> {
        self.price
    }

    pub fn payment_note(&self) -> &str {
        &self.payment_note
    }

    pub fn upi_id(&self) -> &str {
        &self.upi_id
    }

    pub fn qr_code_data(&self) -> &str {
        &self.qr_code_data
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
