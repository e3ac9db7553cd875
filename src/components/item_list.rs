//! Item List Component
//!
//! Displays the items in insertion order.

use leptos::prelude::*;
use shopping_list_core::Entity;

use crate::components::ItemRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_app_store();

    let items = move || store.list().read().items().to_vec();

    view! {
        <ul class="list">
            <For
                each=items
                // Completion is part of the key so a toggled row is rebuilt
                key=|item| (item.id(), item.is_completed())
                children=move |item| view! { <ItemRow item=item /> }
            />
        </ul>
    }
}
