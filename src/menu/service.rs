// CRUD service over the menu store
// Each operation is one load-mutate-save pass over the whole collection

use super::item::{ItemId, MenuItem, MenuItemPatch, NewMenuItem};
use super::store::{MenuStore, StoreError};
use thiserror::Error;
use tokio::sync::Mutex;

/// Error types for service operations
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No stored item has the requested id
    #[error("Menu item not found: {0}")]
    NotFound(ItemId),

    /// The store failed to read or write the collection
    #[error("Store failure: {0}")]
    Store(#[from] StoreError),
}

/// The list/get/create/update/delete contract over a [`MenuStore`]
///
/// The service owns the store and never touches the file directly; all
/// persistence goes through `store.load()` / `store.save()`. A single
/// writer lock serializes every load-mutate-save sequence so concurrent
/// writes cannot clobber each other (the store itself has no such guard).
pub struct MenuService {
    store: MenuStore,
    write_lock: Mutex<()>,
}

impl MenuService {
    /// Create a service over the given store
    pub fn new(store: MenuStore) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// List all menu items
    pub fn list(&self) -> Result<Vec<MenuItem>, ServiceError> {
        Ok(self.store.load()?)
    }

    /// Get a single item by id
    pub fn get(&self, id: ItemId) -> Result<MenuItem, ServiceError> {
        let items = self.store.load()?;
        items
            .into_iter()
            .find(|item| item.id == id)
            .ok_or(ServiceError::NotFound(id))
    }

    /// Create a new item, assigning the next sequential id
    ///
    /// The id is `max(existing ids) + 1`, or 1 for an empty menu.
    pub async fn create(&self, new: NewMenuItem) -> Result<MenuItem, ServiceError> {
        let _guard = self.write_lock.lock().await;

        let mut items = self.store.load()?;
        let id = items.iter().map(|item| item.id).max().unwrap_or(0) + 1;

        let item = new.into_item(id);
        items.push(item.clone());
        self.store.save(&items)?;

        Ok(item)
    }

    /// Apply a partial update to the item with the given id
    ///
    /// Only the fields present in the patch change; the id never does.
    pub async fn update(&self, id: ItemId, patch: MenuItemPatch) -> Result<MenuItem, ServiceError> {
        let _guard = self.write_lock.lock().await;

        let mut items = self.store.load()?;
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(ServiceError::NotFound(id))?;

        patch.apply_to(item);
        let updated = item.clone();

        self.store.save(&items)?;
        Ok(updated)
    }

    /// Remove the item with the given id
    pub async fn delete(&self, id: ItemId) -> Result<(), ServiceError> {
        let _guard = self.write_lock.lock().await;

        let mut items = self.store.load()?;
        let before = items.len();
        items.retain(|item| item.id != id);

        if items.len() == before {
            return Err(ServiceError::NotFound(id));
        }

        self.store.save(&items)?;
        Ok(())
    }
}
