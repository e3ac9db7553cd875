//! Add Item Form Component
//!
//! Name, amount and unit inputs plus the pending validation error.

use leptos::prelude::*;
use shopping_list_core::{messages, ItemDraft};

use crate::store::{store_add_item, use_app_store, AppStateStoreFields};

/// Form for adding a new item to the list
#[component]
pub fn AddItemForm() -> impl IntoView {
    let store = use_app_store();

    let (name, set_name) = signal(String::new());
    let (amount, set_amount) = signal(String::new());
    let (unit, set_unit) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = ItemDraft::new(name.get(), amount.get(), unit.get());
        if store_add_item(&store, &draft).is_ok() {
            // Inputs keep their text after a failed add
            set_name.set(String::new());
            set_amount.set(String::new());
            set_unit.set(String::new());
        }
    };

    let error = move || store.list().read().error();

    view! {
        <form class="form" on:submit=add_item>
            <label>{messages::LABEL_NAME}</label>
            <input
                type="text"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <label>{messages::LABEL_AMOUNT}</label>
            <input
                type="text"
                prop:value=move || amount.get()
                on:input=move |ev| set_amount.set(event_target_value(&ev))
            />
            <label>{messages::LABEL_UNIT}</label>
            <input
                type="text"
                prop:value=move || unit.get()
                on:input=move |ev| set_unit.set(event_target_value(&ev))
            />
            <button type="submit" class="add-button">{messages::BUTTON_ADD}</button>
        </form>

        {move || error().map(|e| view! { <p class="error">{e.to_string()}</p> })}
    }
}
