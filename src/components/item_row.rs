//! Item Row Component
//!
//! Individual item in the list.

use leptos::prelude::*;
use shopping_list_core::{messages, Entity, Item};

use crate::store::{store_remove_item, store_toggle_item, use_app_store};

/// A single item row with purchase toggle and delete buttons
#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let store = use_app_store();

    let id = item.id();
    let completed = item.is_completed();
    let quantity = messages::quantity(item.amount(), item.unit());

    view! {
        <li class=move || if completed { "purchased" } else { "" }>
            <span class="item-name">{item.name().to_string()}</span>
            <span class="item-quantity">{quantity}</span>
            <button class="toggle-btn" on:click=move |_| store_toggle_item(&store, id)>
                {if completed { messages::BUTTON_RESTORE } else { messages::BUTTON_PURCHASED }}
            </button>
            <button class="delete-btn" on:click=move |_| store_remove_item(&store, id)>
                {messages::BUTTON_DELETE}
            </button>
        </li>
    }
}
