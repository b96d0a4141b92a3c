use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use stockbook_inventory::Ledger;

use super::codec::{decode, encode};
use super::r#trait::{LedgerStore, StoreError};

/// Single-file JSON store.
///
/// Saves are written to a temporary sibling file, flushed to disk, then renamed over
/// the destination, so readers only ever see the previous file or the complete new one.
#[derive(Debug, Clone)]
pub struct FileLedgerStore {
    path: PathBuf,
}

impl FileLedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}

impl LedgerStore for FileLedgerStore {
    fn save(&self, ledger: &Ledger) -> Result<(), StoreError> {
        let bytes = encode(ledger)?;

        let mut tmp = NamedTempFile::new_in(self.parent_dir())?;
        tmp.write_all(&bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }

    fn load(&self) -> Result<Ledger, StoreError> {
        let bytes = std::fs::read(&self.path)?;
        decode(&bytes)
    }
}
