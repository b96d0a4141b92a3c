//! Lock-guarded façade over a [`Ledger`].
//!
//! Each public method is one logical operation and holds the ledger lock from start
//! to finish, including the file IO of `save`/`load`. Callers on different threads
//! therefore never observe or interleave with a half-finished operation.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use stockbook_inventory::{ItemId, ItemView, Ledger};

use crate::error::InventoryError;
use crate::ledger_store::{FileLedgerStore, LedgerStore};

#[derive(Debug, Clone, Default)]
pub struct InventoryService {
    ledger: Arc<Mutex<Ledger>>,
}

impl InventoryService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ledger(ledger: Ledger) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(ledger)),
        }
    }

    // Every mutation is all-or-nothing, so a panic elsewhere cannot leave the
    // ledger half-updated and a poisoned lock is safe to reuse.
    fn lock(&self) -> MutexGuard<'_, Ledger> {
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn create(&self, id: ItemId, name: &str) -> Result<(), InventoryError> {
        let result = self.lock().create(id, name);
        log_outcome("create", id, &result);
        Ok(result?)
    }

    pub fn add_quantity(&self, id: ItemId, qty: i64) -> Result<(), InventoryError> {
        let result = self.lock().add_quantity(id, qty);
        log_outcome("add_quantity", id, &result);
        Ok(result?)
    }

    pub fn remove_quantity(&self, id: ItemId, qty: i64) -> Result<(), InventoryError> {
        let result = self.lock().remove_quantity(id, qty);
        log_outcome("remove_quantity", id, &result);
        Ok(result?)
    }

    pub fn list(&self) -> Vec<ItemView> {
        self.lock().list()
    }

    pub fn get(&self, id: ItemId) -> Option<ItemView> {
        self.lock().get(id)
    }

    /// Write every item to `path`. Returns the number of items written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<usize, InventoryError> {
        let path = path.as_ref();
        let store = FileLedgerStore::new(path);
        self.save_to(&store).inspect(|count| {
            tracing::info!(path = %path.display(), items = count, "inventory saved");
        })
    }

    /// Replace the whole ledger with the contents of `path`. Returns the number of
    /// items loaded. On any failure the current items are kept as they were.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<usize, InventoryError> {
        let path = path.as_ref();
        let store = FileLedgerStore::new(path);
        self.load_from(&store).inspect(|count| {
            tracing::info!(path = %path.display(), items = count, "inventory loaded");
        })
    }

    pub fn save_to(&self, store: &dyn LedgerStore) -> Result<usize, InventoryError> {
        let ledger = self.lock();
        store.save(&ledger).map_err(|e| {
            tracing::warn!(error = %e, "inventory save failed");
            e
        })?;
        Ok(ledger.len())
    }

    pub fn load_from(&self, store: &dyn LedgerStore) -> Result<usize, InventoryError> {
        let mut ledger = self.lock();
        let incoming = store.load().map_err(|e| {
            tracing::warn!(error = %e, "inventory load failed; keeping current items");
            e
        })?;
        let count = incoming.len();
        ledger.replace_with(incoming);
        Ok(count)
    }
}

fn log_outcome<E: core::fmt::Display>(op: &'static str, id: ItemId, result: &Result<(), E>) {
    match result {
        Ok(()) => tracing::debug!(op, item_id = %id, "inventory operation applied"),
        Err(e) => tracing::debug!(op, item_id = %id, error = %e, "inventory operation rejected"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use crate::ledger_store::InMemoryLedgerStore;

    fn seeded() -> InventoryService {
        let service = InventoryService::new();
        service.create(ItemId(1), "Widget").unwrap();
        service.add_quantity(ItemId(1), 50).unwrap();
        service.create(ItemId(2), "Gadget").unwrap();
        service
    }

    #[test]
    fn errors_map_to_kinds() {
        let service = seeded();
        let kind = |r: Result<(), InventoryError>| r.unwrap_err().kind();

        assert_eq!(kind(service.create(ItemId(3), "  ")), ErrorKind::Validation);
        assert_eq!(kind(service.create(ItemId(1), "Again")), ErrorKind::DuplicateIdentity);
        assert_eq!(kind(service.add_quantity(ItemId(99), 10)), ErrorKind::NotFound);
        assert_eq!(kind(service.remove_quantity(ItemId(2), 1)), ErrorKind::Validation);
        assert_eq!(kind(service.add_quantity(ItemId(1), 0)), ErrorKind::Validation);
    }

    #[test]
    fn round_trip_through_in_memory_store() {
        let service = seeded();
        let store = InMemoryLedgerStore::new();
        assert_eq!(service.save_to(&store).unwrap(), 2);

        let fresh = InventoryService::new();
        assert_eq!(fresh.load_from(&store).unwrap(), 2);
        assert_eq!(fresh.list(), service.list());
    }

    #[test]
    fn load_replaces_rather_than_merges() {
        let store = InMemoryLedgerStore::new();
        seeded().save_to(&store).unwrap();

        let other = InventoryService::new();
        other.create(ItemId(7), "Sprocket").unwrap();
        other.load_from(&store).unwrap();

        assert!(other.get(ItemId(7)).is_none());
        assert_eq!(other.list().len(), 2);
    }

    #[test]
    fn failed_load_keeps_current_state() {
        let service = seeded();
        let before = service.list();

        let store = InMemoryLedgerStore::new();
        let err = service.load_from(&store).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);

        store.put_raw(b"{\"format_version\":1,\"items\":[{\"id\":1".to_vec());
        let err = service.load_from(&store).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);

        assert_eq!(service.list(), before);
    }

    #[test]
    fn clones_share_one_ledger_across_threads() {
        let service = InventoryService::new();
        service.create(ItemId(1), "Widget").unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let service = service.clone();
                std::thread::spawn(move || {
                    for _ in 0..10 {
                        service.add_quantity(ItemId(1), 10).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(service.get(ItemId(1)).unwrap().quantity, 800);
    }
}
