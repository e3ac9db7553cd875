//! Shopping List App
//!
//! Main application component: heading, form, items and summary.

use leptos::prelude::*;
use reactive_stores::Store;
use shopping_list_core::messages;

use crate::components::{AddItemForm, ItemList, SummaryLine};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // Provide the store to all children
    provide_context(Store::new(AppState::default()));

    view! {
        <div class="shopping-list">
            <h1>{messages::TITLE}</h1>

            <AddItemForm />

            <ItemList />

            <SummaryLine />
        </div>
    }
}
