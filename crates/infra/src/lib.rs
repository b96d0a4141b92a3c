//! Infrastructure layer: durable storage and the shared, lock-guarded inventory service.

pub mod error;
pub mod ledger_store;
pub mod service;

pub use error::{ErrorKind, InventoryError};
pub use ledger_store::{FileLedgerStore, InMemoryLedgerStore, LedgerStore, StoreError};
pub use service::InventoryService;
