use core::str::FromStr;

use stockbook_core::{DomainError, DomainResult, Entity};

use crate::quantity::{Quantity, QuantityStep};

/// Inventory item identifier (unique within a [`crate::Ledger`]).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub i64);

impl ItemId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .trim()
            .parse::<i64>()
            .map_err(|e| DomainError::validation(format!("ItemId '{s}': {e}")))?;
        Ok(Self(id))
    }
}

/// A single inventory record.
///
/// `id` and `name` are fixed at creation; only the quantity moves, and only through
/// [`Item::increase`] / [`Item::decrease`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    name: String,
    quantity: Quantity,
}

impl Item {
    /// New items always start empty. Name/uniqueness checks are the ledger's job.
    pub(crate) fn new(id: ItemId, name: String) -> Self {
        Self::restore(id, name, Quantity::ZERO)
    }

    pub(crate) fn restore(id: ItemId, name: String, quantity: Quantity) -> Self {
        Self { id, name, quantity }
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Add `qty` units (`1..=100`); the resulting total may not exceed 9999.
    pub fn increase(&mut self, qty: i64) -> DomainResult<()> {
        let step = QuantityStep::try_from(qty)?;
        self.quantity = self.quantity.checked_add(step)?;
        Ok(())
    }

    /// Remove `qty` units (`1..=100`); the resulting total may not drop below 0.
    pub fn decrease(&mut self, qty: i64) -> DomainResult<()> {
        let step = QuantityStep::try_from(qty)?;
        self.quantity = self.quantity.checked_sub(step)?;
        Ok(())
    }

    pub fn view(&self) -> ItemView {
        ItemView {
            id: self.id,
            name: self.name.clone(),
            quantity: self.quantity.get(),
        }
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Read-only row handed out to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub id: ItemId,
    pub name: String,
    pub quantity: u16,
}
