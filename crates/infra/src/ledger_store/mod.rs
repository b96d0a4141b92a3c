pub mod codec;
pub mod file;
pub mod in_memory;
pub mod r#trait;

pub use codec::{FORMAT_VERSION, decode, encode};
pub use file::FileLedgerStore;
pub use in_memory::InMemoryLedgerStore;
pub use r#trait::{LedgerStore, StoreError};
