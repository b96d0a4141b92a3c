use thiserror::Error;

use stockbook_inventory::Ledger;

/// Whole-ledger persistence boundary.
///
/// A store moves the complete item sequence at once: `save` writes every row in
/// order, `load` returns a fully validated [`Ledger`] or an error. There is no
/// partial or incremental mode.
pub trait LedgerStore: Send + Sync {
    fn save(&self, ledger: &Ledger) -> Result<(), StoreError>;

    fn load(&self) -> Result<Ledger, StoreError>;
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying storage could not be read or written.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored bytes do not describe a valid item sequence.
    #[error("format error: {0}")]
    Format(String),
}

impl StoreError {
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }
}
