//! Item Entity
//!
//! One shopping-list entry.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::Entity;

/// Identifier of an item, unique within one list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A shopping-list entry
///
/// Fields are read-only outside the crate: an item is only built by a
/// successful add and only mutated by toggling its completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    amount: u32,
    unit: String,
    completed: bool,
}

impl Item {
    /// Create a new, not yet purchased item from already validated parts
    pub(crate) fn new(id: ItemId, name: String, amount: u32, unit: String) -> Self {
        Self {
            id,
            name,
            amount,
            unit,
            completed: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Whether the user marked this item as purchased
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Case-insensitive name comparison used for duplicate detection
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    pub(crate) fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
