//! In-memory implementation of ItemService for tests and single-process apps

use crate::config::UpiConfig;
use crate::core::encoder::default_note;
use crate::core::error::StoreError;
use crate::core::field::ItemForm;
use crate::core::item::{ItemDraft, ItemUpdate, PaymentItem};
use crate::core::service::ItemService;
use crate::core::validation::validate_all;
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

/// In-memory payment item store
///
/// Items are kept oldest first. Uses RwLock for thread-safe access;
/// each write holds the lock for the whole read-modify-write so edits to one
/// item are serialized.
#[derive(Clone)]
pub struct InMemoryItemStore {
    items: Arc<RwLock<IndexMap<Uuid, PaymentItem>>>,
    config: Arc<UpiConfig>,
}

impl InMemoryItemStore {
    /// Create an empty store
    pub fn new(config: UpiConfig) -> Self {
        Self {
            items: Arc::new(RwLock::new(IndexMap::new())),
            config: Arc::new(config),
        }
    }

    /// Create a store from previously persisted items
    ///
    /// Payloads are regenerated on load so they always match the fields and
    /// the current configuration, and items are reordered by creation time.
    /// Fails if any stored item no longer encodes.
    pub fn with_items(
        config: UpiConfig,
        items: impl IntoIterator<Item = PaymentItem>,
    ) -> Result<Self, StoreError> {
        let mut restored = IndexMap::new();
        for mut item in items {
            item.regenerate(&config)?;
            restored.insert(item.id(), item);
        }
        restored.sort_by(|_, a, _, b| a.created_at().cmp(&b.created_at()));
        tracing::debug!(count = restored.len(), "Restored payment items");

        Ok(Self {
            items: Arc::new(RwLock::new(restored)),
            config: Arc::new(config),
        })
    }

    /// Configuration every payload in this store is encoded with
    pub fn config(&self) -> &UpiConfig {
        &self.config
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, IndexMap<Uuid, PaymentItem>>, StoreError> {
        self.items
            .read()
            .map_err(|e| StoreError::Poisoned(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, IndexMap<Uuid, PaymentItem>>, StoreError> {
        self.items
            .write()
            .map_err(|e| StoreError::Poisoned(format!("Failed to acquire write lock: {}", e)))
    }
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::new(UpiConfig::default())
    }
}

#[async_trait]
impl ItemService for InMemoryItemStore {
    async fn create(&self, form: ItemForm) -> Result<PaymentItem, StoreError> {
        let errors = validate_all(&form, &self.config);
        if !errors.is_empty() {
            return Err(StoreError::Invalid(errors));
        }

        let item = PaymentItem::from_draft(ItemDraft::from_form(&form), &self.config)
            .inspect_err(|e| tracing::warn!(error = %e, "Payment item rejected by encoder"))?;

        self.write()?.insert(item.id(), item.clone());
        tracing::debug!(item_id = %item.id(), "Payment item created");

        Ok(item)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<PaymentItem>, StoreError> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<PaymentItem>, StoreError> {
        Ok(self.read()?.values().cloned().collect())
    }

    async fn update(&self, id: &Uuid, update: ItemUpdate) -> Result<PaymentItem, StoreError> {
        let mut items = self.write()?;
        let current = items.get(id).ok_or(StoreError::NotFound { id: *id })?;

        let mut next = current.clone();
        next.apply(update, &self.config).inspect_err(
            |e| tracing::warn!(item_id = %id, error = %e, "Payment item update rejected"),
        )?;

        // The generated note is not user input and may exceed the note limit
        let mut form = next.to_form();
        if next.payment_note() == default_note(next.name()) {
            form.payment_note.clear();
        }
        let errors = validate_all(&form, &self.config);
        if !errors.is_empty() {
            return Err(StoreError::Invalid(errors));
        }

        items.insert(*id, next.clone());
        tracing::debug!(item_id = %id, "Payment item updated");

        Ok(next)
    }

    async fn toggle_status(&self, id: &Uuid) -> Result<PaymentItem, StoreError> {
        let mut items = self.write()?;
        let item = items.get_mut(id).ok_or(StoreError::NotFound { id: *id })?;

        item.toggle_active();
        tracing::debug!(item_id = %id, active = item.is_active(), "Payment item toggled");

        Ok(item.clone())
    }

    async fn delete(&self, id: &Uuid) -> Result<(), StoreError> {
        let mut items = self.write()?;
        if items.shift_remove(id).is_none() {
            return Err(StoreError::NotFound { id: *id });
        }
        tracing::debug!(item_id = %id, "Payment item deleted");

        Ok(())
    }
}
