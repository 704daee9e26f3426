//! Service trait for payment item storage

use crate::core::error::StoreError;
use crate::core::field::ItemForm;
use crate::core::item::{ItemUpdate, PaymentItem};
use async_trait::async_trait;
use uuid::Uuid;

/// Service trait for managing payment items
///
/// Implementations own the item collection and are the only writers to it.
/// Every write that touches a payload-relevant field must leave the item's
/// `qr_code_data` recomputed, which [`PaymentItem::apply`] guarantees.
#[async_trait]
pub trait ItemService: Send + Sync {
    /// Validate a submitted form and store the resulting item
    async fn create(&self, form: ItemForm) -> Result<PaymentItem, StoreError>;

    /// Get an item by ID
    async fn get(&self, id: &Uuid) -> Result<Option<PaymentItem>, StoreError>;

    /// List all items, oldest first
    async fn list(&self) -> Result<Vec<PaymentItem>, StoreError>;

    /// Apply a partial edit, regenerating the payload
    async fn update(&self, id: &Uuid, update: ItemUpdate) -> Result<PaymentItem, StoreError>;

    /// Flip an item's active flag
    async fn toggle_status(&self, id: &Uuid) -> Result<PaymentItem, StoreError>;

    /// Delete an item
    async fn delete(&self, id: &Uuid) -> Result<(), StoreError>;
}
