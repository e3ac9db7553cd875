//! Derived State
//!
//! Remaining count and the all-purchased flag, computed from the items.

use serde::{Deserialize, Serialize};

use crate::item::Item;
use crate::messages;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Items not yet purchased
    pub remaining_count: usize,
    /// At least one item, and every item purchased
    pub all_completed: bool,
    /// Total items in the list
    pub total: usize,
}

impl Summary {
    pub fn from_items(items: &[Item]) -> Self {
        let remaining_count = items.iter().filter(|item| !item.is_completed()).count();
        Self {
            remaining_count,
            all_completed: !items.is_empty() && remaining_count == 0,
            total: items.len(),
        }
    }

    /// Text of the summary line, or `None` when nothing should be shown
    pub fn status_line(&self) -> Option<String> {
        if self.all_completed {
            Some(messages::ALL_PURCHASED.to_string())
        } else if self.total > 0 {
            Some(messages::remaining(self.remaining_count))
        } else {
            None
        }
    }
}
