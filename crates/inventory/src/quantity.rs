//! Bounded quantity value objects.

use stockbook_core::{DomainError, DomainResult, ValueObject};

/// Stock level held by a single item. Always within `0..=Quantity::MAX`.
///
/// Only [`Quantity::new`] and the checked operations produce values, so the bound
/// cannot be bypassed from outside this module.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(u16);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);
    pub const MAX: Quantity = Quantity(9999);

    /// Validate an arbitrary integer as a stock level.
    pub fn new(value: i64) -> DomainResult<Self> {
        if !(0..=i64::from(Self::MAX.0)).contains(&value) {
            return Err(DomainError::validation(format!(
                "quantity {value} outside 0..={}",
                Self::MAX.0
            )));
        }
        Ok(Self(value as u16))
    }

    pub fn get(self) -> u16 {
        self.0
    }

    /// Raise the level by `step`, refusing to exceed [`Quantity::MAX`].
    pub fn checked_add(self, step: QuantityStep) -> DomainResult<Self> {
        match self.0.checked_add(step.get()) {
            Some(total) if total <= Self::MAX.0 => Ok(Self(total)),
            _ => Err(DomainError::validation(format!(
                "adding {} to {} would exceed {}",
                step.get(),
                self.0,
                Self::MAX.0
            ))),
        }
    }

    /// Lower the level by `step`, refusing to go below zero.
    pub fn checked_sub(self, step: QuantityStep) -> DomainResult<Self> {
        self.0.checked_sub(step.get()).map(Self).ok_or_else(|| {
            DomainError::validation(format!(
                "cannot remove {} from {}: total would go negative",
                step.get(),
                self.0
            ))
        })
    }
}

impl ValueObject for Quantity {}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Amount moved by a single add/remove operation. Always within `MIN..=MAX`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuantityStep(u16);

impl QuantityStep {
    pub const MIN: u16 = 1;
    pub const MAX: u16 = 100;

    pub fn get(self) -> u16 {
        self.0
    }
}

impl TryFrom<i64> for QuantityStep {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if !(i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            return Err(DomainError::validation(format!(
                "step {value} outside {}..={}",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(value as u16))
    }
}

impl ValueObject for QuantityStep {}
