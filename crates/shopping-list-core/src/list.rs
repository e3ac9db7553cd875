//! Shopping List
//!
//! Owns the items in display order plus the single pending-error slot.

use log::debug;

use crate::draft::ItemDraft;
use crate::entity::{find_by_id, find_by_id_mut, Entity};
use crate::error::AddError;
use crate::item::{Item, ItemId};
use crate::summary::Summary;

/// In-memory shopping list
///
/// Every operation leaves the list in a valid state: ids are distinct, no two
/// names are equal ignoring case, and every amount is positive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingList {
    /// Items in insertion order
    items: Vec<Item>,
    /// Message of the last failed add, cleared by the next successful one
    error: Option<AddError>,
    /// Next id to hand out
    next_id: u64,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate raw input and append a new item
    ///
    /// On failure the error slot is overwritten and the items are untouched.
    pub fn add(&mut self, name: &str, amount: &str, unit: &str) -> Result<ItemId, AddError> {
        self.add_draft(&ItemDraft::new(name, amount, unit))
    }

    /// Same as [`ShoppingList::add`], taking the form fields as a draft
    pub fn add_draft(&mut self, draft: &ItemDraft) -> Result<ItemId, AddError> {
        match self.try_insert(draft) {
            Ok(id) => {
                self.error = None;
                Ok(id)
            }
            Err(e) => {
                debug!("rejected item {:?}: {}", draft.name, e);
                self.error = Some(e);
                Err(e)
            }
        }
    }

    fn try_insert(&mut self, draft: &ItemDraft) -> Result<ItemId, AddError> {
        let valid = draft.validate()?;
        if self.items.iter().any(|item| item.has_name(valid.name)) {
            return Err(AddError::Duplicate);
        }

        let id = self.allocate_id();
        let item = Item::new(id, valid.name.to_string(), valid.amount, valid.unit.to_string());
        debug!("added item {} {:?} ({} {})", id, item.name(), item.amount(), item.unit());
        self.items.push(item);
        Ok(id)
    }

    fn allocate_id(&mut self) -> ItemId {
        self.next_id += 1;
        ItemId::new(self.next_id)
    }

    /// Remove an item, returning it if it was present
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        let item = self.items.remove(index);
        debug!("removed item {} {:?}", id, item.name());
        Some(item)
    }

    /// Flip the purchased flag, returning the new value if the item exists
    pub fn toggle_completed(&mut self, id: ItemId) -> Option<bool> {
        let item = find_by_id_mut(&mut self.items, id)?;
        item.toggle();
        debug!("item {} completed={}", id, item.is_completed());
        Some(item.is_completed())
    }

    /// Remaining count and all-purchased flag for the current items
    pub fn summary(&self) -> Summary {
        Summary::from_items(&self.items)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        find_by_id(&self.items, id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Error of the last add attempt, if it failed
    pub fn error(&self) -> Option<AddError> {
        self.error
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
