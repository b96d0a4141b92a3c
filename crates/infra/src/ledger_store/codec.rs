//! On-disk document format.
//!
//! ```json
//! {
//!   "format_version": 1,
//!   "saved_at": "2026-01-01T00:00:00Z",
//!   "items": [ { "id": 1, "name": "Widget", "quantity": 30 } ]
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockbook_inventory::{ItemId, ItemView, Ledger, LedgerSnapshot};

use super::r#trait::StoreError;

/// Version written by [`encode`] and the only one accepted by [`decode`].
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct LedgerDocument {
    format_version: u32,
    #[serde(default)]
    saved_at: Option<DateTime<Utc>>,
    items: Vec<ItemRecord>,
}

/// One stored row. Unknown keys are rejected just like at the document level.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ItemRecord {
    id: i64,
    name: String,
    quantity: u16,
}

impl From<ItemView> for ItemRecord {
    fn from(view: ItemView) -> Self {
        Self {
            id: view.id.get(),
            name: view.name,
            quantity: view.quantity,
        }
    }
}

impl From<ItemRecord> for ItemView {
    fn from(record: ItemRecord) -> Self {
        Self {
            id: ItemId::new(record.id),
            name: record.name,
            quantity: record.quantity,
        }
    }
}

pub fn encode(ledger: &Ledger) -> Result<Vec<u8>, StoreError> {
    let doc = LedgerDocument {
        format_version: FORMAT_VERSION,
        saved_at: Some(Utc::now()),
        items: ledger.list().into_iter().map(ItemRecord::from).collect(),
    };
    serde_json::to_vec_pretty(&doc).map_err(|e| StoreError::format(e.to_string()))
}

/// Parse and validate a stored document. Either every row is accepted or an error
/// is returned; no partially built ledger escapes.
pub fn decode(bytes: &[u8]) -> Result<Ledger, StoreError> {
    let doc: LedgerDocument =
        serde_json::from_slice(bytes).map_err(|e| StoreError::format(e.to_string()))?;

    if doc.format_version != FORMAT_VERSION {
        return Err(StoreError::format(format!(
            "unsupported format_version {} (expected {FORMAT_VERSION})",
            doc.format_version
        )));
    }

    let items = doc.items.into_iter().map(ItemView::from).collect();
    Ledger::from_snapshot(LedgerSnapshot { items })
        .map_err(|e| StoreError::format(e.to_string()))
}
