//! Shopping List Domain
//!
//! Items, add-time validation and derived state for the shopping list.
//! This layer has no UI or platform dependencies.

mod draft;
mod entity;
mod error;
mod item;
mod list;
mod proptests;
mod summary;

pub mod messages;

pub use draft::{parse_amount, ItemDraft};
pub use entity::Entity;
pub use error::AddError;
pub use item::{Item, ItemId};
pub use list::ShoppingList;
pub use summary::Summary;

/// Longest accepted item name, in characters, after trimming
pub const MAX_NAME_CHARS: usize = 15;
