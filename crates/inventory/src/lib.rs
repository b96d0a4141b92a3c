//! Inventory domain module.
//!
//! This crate contains the business rules for the stock ledger, implemented purely as
//! deterministic domain logic (no IO, no logging, no storage). Persistence lives in
//! `stockbook-infra`, which moves whole ledgers in and out through [`LedgerSnapshot`].

pub mod item;
pub mod ledger;
pub mod quantity;

pub use item::{Item, ItemId, ItemView};
pub use ledger::{Ledger, LedgerSnapshot};
pub use quantity::{Quantity, QuantityStep};
