use std::sync::RwLock;

use stockbook_inventory::Ledger;

use super::codec::{decode, encode};
use super::r#trait::{LedgerStore, StoreError};

/// In-memory store holding the encoded document.
///
/// Intended for tests/dev. Goes through the same codec as [`super::FileLedgerStore`].
#[derive(Debug, Default)]
pub struct InMemoryLedgerStore {
    bytes: RwLock<Option<Vec<u8>>>,
}

impl InMemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored document with arbitrary bytes.
    pub fn put_raw(&self, bytes: impl Into<Vec<u8>>) {
        let mut slot = self.bytes.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(bytes.into());
    }
}

impl LedgerStore for InMemoryLedgerStore {
    fn save(&self, ledger: &Ledger) -> Result<(), StoreError> {
        let bytes = encode(ledger)?;
        self.put_raw(bytes);
        Ok(())
    }

    fn load(&self) -> Result<Ledger, StoreError> {
        let slot = self.bytes.read().unwrap_or_else(|e| e.into_inner());
        match slot.as_deref() {
            Some(bytes) => decode(bytes),
            None => Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "nothing saved yet",
            ))),
        }
    }
}
