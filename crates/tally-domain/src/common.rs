//! Shared traits and enums for billing primitives.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Exposes a stable identifier for entities stored in the ledger.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Finds the entity with `id` in a ledger collection.
pub fn find_by_id<T: Identifiable>(items: &[T], id: Uuid) -> Option<&T> {
    items.iter().find(|item| item.id() == id)
}

/// Mutable counterpart of [`find_by_id`].
pub fn find_by_id_mut<T: Identifiable>(items: &mut [T], id: Uuid) -> Option<&mut T> {
    items.iter_mut().find(|item| item.id() == id)
}

/// Decides how overrun hours are reported for contracts without a purchase
/// amount.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UncappedOverrunPolicy {
    /// Uncapped contracts are never over budget.
    #[default]
    NeverOver,
    /// Every requested hour counts as overrun.
    AllHours,
}

impl fmt::Display for UncappedOverrunPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UncappedOverrunPolicy::NeverOver => "never_over",
            UncappedOverrunPolicy::AllHours => "all_hours",
        };
        f.write_str(label)
    }
}
