//! The ledger: ordered, identity-unique collection of items and the sole mutator
//! of their quantities.

use stockbook_core::{DomainError, DomainResult};

use crate::item::{Item, ItemId, ItemView};
use crate::quantity::Quantity;

/// Ordered collection of items, in creation order, with no duplicate ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    items: Vec<Item>,
}

/// Whole-ledger state as plain rows, used to move a ledger across the storage boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerSnapshot {
    pub items: Vec<ItemView>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new, empty item.
    ///
    /// Fails with `Validation` for a blank name and `DuplicateIdentity` if `id` is taken.
    pub fn create(&mut self, id: ItemId, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        ensure_name(&name)?;
        if self.position(id).is_some() {
            return Err(DomainError::duplicate(format!("item {id} already exists")));
        }
        self.items.push(Item::new(id, name));
        Ok(())
    }

    pub fn add_quantity(&mut self, id: ItemId, qty: i64) -> DomainResult<()> {
        self.find_mut(id)?.increase(qty)
    }

    pub fn remove_quantity(&mut self, id: ItemId, qty: i64) -> DomainResult<()> {
        self.find_mut(id)?.decrease(qty)
    }

    /// Snapshot of every row in insertion order. Detached from the ledger.
    pub fn list(&self) -> Vec<ItemView> {
        self.items.iter().map(Item::view).collect()
    }

    pub fn get(&self, id: ItemId) -> Option<ItemView> {
        self.position(id).map(|idx| self.items[idx].view())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot { items: self.list() }
    }

    /// Rebuild a ledger from stored rows, re-checking every invariant.
    ///
    /// Nothing is returned unless every row is valid, so a bad snapshot can never
    /// produce a half-populated ledger.
    pub fn from_snapshot(snapshot: LedgerSnapshot) -> DomainResult<Self> {
        let mut ledger = Ledger {
            items: Vec::with_capacity(snapshot.items.len()),
        };
        for row in snapshot.items {
            ensure_name(&row.name)?;
            if ledger.position(row.id).is_some() {
                return Err(DomainError::duplicate(format!(
                    "item {} appears more than once",
                    row.id
                )));
            }
            let quantity = Quantity::new(i64::from(row.quantity))?;
            ledger.items.push(Item::restore(row.id, row.name, quantity));
        }
        Ok(ledger)
    }

    /// Swap in `other` wholesale. No merge with existing items.
    pub fn replace_with(&mut self, other: Ledger) {
        *self = other;
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id_typed() == id)
    }

    fn find_mut(&mut self, id: ItemId) -> DomainResult<&mut Item> {
        self.items
            .iter_mut()
            .find(|item| item.id_typed() == id)
            .ok_or_else(|| DomainError::not_found(format!("item {id}")))
    }
}

fn ensure_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("name cannot be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn row(id: i64, name: &str, quantity: u16) -> ItemView {
        ItemView {
            id: ItemId(id),
            name: name.to_string(),
            quantity,
        }
    }

    #[test]
    fn create_add_remove_scenario() {
        let mut ledger = Ledger::new();
        ledger.create(ItemId(1), "Widget").unwrap();
        ledger.add_quantity(ItemId(1), 50).unwrap();
        ledger.remove_quantity(ItemId(1), 20).unwrap();

        assert_eq!(ledger.list(), vec![row(1, "Widget", 30)]);
    }

    #[test]
    fn duplicate_create_is_rejected_and_ledger_unchanged() {
        let mut ledger = Ledger::new();
        ledger.create(ItemId(1), "Widget").unwrap();

        let err = ledger.create(ItemId(1), "Gadget").unwrap_err();
        assert!(matches!(err, DomainError::DuplicateIdentity(_)));
        assert_eq!(ledger.list(), vec![row(1, "Widget", 0)]);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut ledger = Ledger::new();
        assert!(matches!(
            ledger.add_quantity(ItemId(99), 10),
            Err(DomainError::NotFound(_))
        ));
        assert!(matches!(
            ledger.remove_quantity(ItemId(99), 10),
            Err(DomainError::NotFound(_))
        ));
    }

    #[test]
    fn blank_names_are_rejected() {
        let mut ledger = Ledger::new();
        for name in ["", "   ", "\t\n"] {
            assert!(matches!(
                ledger.create(ItemId(1), name),
                Err(DomainError::Validation(_))
            ));
        }
        assert!(ledger.is_empty());
    }

    #[test]
    fn item_validation_errors_propagate_unchanged() {
        let mut ledger = Ledger::new();
        ledger.create(ItemId(1), "Widget").unwrap();
        ledger.add_quantity(ItemId(1), 5).unwrap();

        assert!(matches!(
            ledger.add_quantity(ItemId(1), 101),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            ledger.remove_quantity(ItemId(1), 6),
            Err(DomainError::Validation(_))
        ));
        assert_eq!(ledger.get(ItemId(1)).unwrap().quantity, 5);
    }

    #[test]
    fn list_preserves_insertion_order_and_is_detached() {
        let mut ledger = Ledger::new();
        ledger.create(ItemId(30), "C").unwrap();
        ledger.create(ItemId(10), "A").unwrap();
        ledger.create(ItemId(20), "B").unwrap();

        let mut rows = ledger.list();
        let ids: Vec<i64> = rows.iter().map(|r| r.id.get()).collect();
        assert_eq!(ids, vec![30, 10, 20]);

        rows[0].quantity = 9999;
        rows.clear();
        assert_eq!(ledger.get(ItemId(30)).unwrap().quantity, 0);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn from_snapshot_rejects_invalid_rows() {
        let dup = LedgerSnapshot {
            items: vec![row(1, "A", 0), row(1, "B", 0)],
        };
        assert!(matches!(
            Ledger::from_snapshot(dup),
            Err(DomainError::DuplicateIdentity(_))
        ));

        let blank = LedgerSnapshot {
            items: vec![row(1, " ", 0)],
        };
        assert!(matches!(
            Ledger::from_snapshot(blank),
            Err(DomainError::Validation(_))
        ));

        let too_many = LedgerSnapshot {
            items: vec![row(1, "A", 10_000)],
        };
        assert!(matches!(
            Ledger::from_snapshot(too_many),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn replace_with_swaps_everything() {
        let mut ledger = Ledger::new();
        ledger.create(ItemId(1), "Old").unwrap();

        let incoming = Ledger::from_snapshot(LedgerSnapshot {
            items: vec![row(2, "New", 7)],
        })
        .unwrap();
        ledger.replace_with(incoming);

        assert_eq!(ledger.list(), vec![row(2, "New", 7)]);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Create(i64),
        Add(i64, i64),
        Remove(i64, i64),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0i64..8).prop_map(Op::Create),
            (0i64..8, -5i64..120).prop_map(|(id, q)| Op::Add(id, q)),
            (0i64..8, -5i64..120).prop_map(|(id, q)| Op::Remove(id, q)),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: whatever sequence of operations is applied, a failed operation
        /// leaves the ledger untouched and the snapshot always restores to an equal ledger.
        #[test]
        fn failures_are_no_ops_and_snapshot_round_trips(
            ops in prop::collection::vec(op_strategy(), 0..60)
        ) {
            let mut ledger = Ledger::new();
            for op in ops {
                let before = ledger.clone();
                let result = match op {
                    Op::Create(id) => ledger.create(ItemId(id), format!("item-{id}")),
                    Op::Add(id, q) => ledger.add_quantity(ItemId(id), q),
                    Op::Remove(id, q) => ledger.remove_quantity(ItemId(id), q),
                };
                if result.is_err() {
                    prop_assert_eq!(&ledger, &before);
                }
                for item in ledger.iter() {
                    prop_assert!(item.quantity() <= Quantity::MAX);
                }
            }

            let restored = Ledger::from_snapshot(ledger.snapshot()).unwrap();
            prop_assert_eq!(restored.list(), ledger.list());
        }
    }
}
