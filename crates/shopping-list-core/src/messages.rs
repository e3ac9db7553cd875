//! Display Strings
//!
//! Fixed literals shown by the presentation layer.

pub const TITLE: &str = "Shopping list";

pub const LABEL_NAME: &str = "Item name";
pub const LABEL_AMOUNT: &str = "Amount";
pub const LABEL_UNIT: &str = "Unit";

pub const BUTTON_ADD: &str = "Add";
pub const BUTTON_PURCHASED: &str = "Purchased";
pub const BUTTON_RESTORE: &str = "Restore";
pub const BUTTON_DELETE: &str = "Delete";

pub const ALL_PURCHASED: &str = "All items have been purchased!";

/// "3 items remaining"
pub fn remaining(count: usize) -> String {
    format!("{} items remaining", count)
}

/// Quantity column of a row, e.g. "2 liter"
pub fn quantity(amount: u32, unit: &str) -> String {
    format!("{} {}", amount, unit)
}
