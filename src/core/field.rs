//! Form fields and per-field error maps

use crate::config::UpiConfig;
use crate::core::error::Reason;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Names of the editable fields of a payment item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    UpiId,
    Price,
    Description,
    PaymentNote,
}

impl Field {
    /// Key used for this field in form payloads and error maps
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::UpiId => "upiId",
            Field::Price => "price",
            Field::Description => "description",
            Field::PaymentNote => "paymentNote",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw, untrusted field bundle as typed into the form
///
/// Every field is kept as text: the price in particular is whatever the user
/// typed, parsed later by the validator and by [`crate::core::amount::parse_amount`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemForm {
    pub name: String,
    pub upi_id: String,
    pub price: String,
    pub description: String,
    pub payment_note: String,
}

impl ItemForm {
    /// Start a form with the two mandatory fields filled in
    pub fn new(name: impl Into<String>, upi_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            upi_id: upi_id.into(),
            ..Self::default()
        }
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = price.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.payment_note = note.into();
        self
    }
}

/// Failed fields mapped to the first rule each one violated
///
/// Keeps insertion order, which follows the order the fields are checked in.
/// An empty map means the whole form is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(IndexMap<Field, Reason>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `reason` for `field` unless the field already failed
    pub fn insert(&mut self, field: Field, reason: Reason) {
        self.0.entry(field).or_insert(reason);
    }

    /// Record the outcome of a validator, ignoring successes
    pub fn record(&mut self, field: Field, verdict: Result<(), Reason>) {
        if let Err(reason) = verdict {
            self.insert(field, reason);
        }
    }

    pub fn get(&self, field: Field) -> Option<Reason> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, Reason)> + '_ {
        self.0.iter().map(|(field, reason)| (*field, *reason))
    }

    /// Field-aware messages suitable for display next to each input
    pub fn messages(&self, config: &UpiConfig) -> IndexMap<Field, String> {
        self.iter()
            .map(|(field, reason)| (field, reason.message(field, config)))
            .collect()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, reason) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", field, reason.code())?;
            first = false;
        }
        Ok(())
    }
}
