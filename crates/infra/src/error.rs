use thiserror::Error;

use stockbook_core::DomainError;

use crate::ledger_store::StoreError;

/// Every failure an inventory operation can surface to its caller.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Flat classification of [`InventoryError`] for callers that branch on the kind only.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    DuplicateIdentity,
    NotFound,
    Io,
    Format,
}

impl InventoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            InventoryError::Domain(DomainError::Validation(_)) => ErrorKind::Validation,
            InventoryError::Domain(DomainError::DuplicateIdentity(_)) => ErrorKind::DuplicateIdentity,
            InventoryError::Domain(DomainError::NotFound(_)) => ErrorKind::NotFound,
            InventoryError::Store(StoreError::Io(_)) => ErrorKind::Io,
            InventoryError::Store(StoreError::Format(_)) => ErrorKind::Format,
        }
    }
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::DuplicateIdentity => "duplicate_identity",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Io => "io",
            ErrorKind::Format => "format",
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
