//! Global Application State Store
//!
//! Uses Leptos reactive_stores so views re-render from the list after every
//! mutation.

use leptos::prelude::*;
use reactive_stores::Store;
use shopping_list_core::{AddError, ItemDraft, ItemId, ShoppingList};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The shopping list, including its pending error
    pub list: ShoppingList,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Validate the form fields and append a new item
pub fn store_add_item(store: &AppStore, draft: &ItemDraft) -> Result<ItemId, AddError> {
    let result = store.list().write().add_draft(draft);
    if let Err(e) = &result {
        log::info!("could not add {:?}: {}", draft.name, e);
    }
    result
}

/// Remove an item from the store by ID
pub fn store_remove_item(store: &AppStore, item_id: ItemId) {
    store.list().write().remove(item_id);
}

/// Flip an item's purchased flag by ID
pub fn store_toggle_item(store: &AppStore, item_id: ItemId) {
    store.list().write().toggle_completed(item_id);
}
