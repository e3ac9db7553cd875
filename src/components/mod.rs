//! UI Components
//!
//! Leptos components for the shopping list page.

mod add_item_form;
mod item_list;
mod item_row;
mod summary_line;

pub use add_item_form::AddItemForm;
pub use item_list::ItemList;
pub use item_row::ItemRow;
pub use summary_line::SummaryLine;
