//! Summary Line Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// "N items remaining", the all-purchased message, or nothing for an empty list
#[component]
pub fn SummaryLine() -> impl IntoView {
    let store = use_app_store();

    let status = move || store.list().read().summary().status_line();

    move || status().map(|text| view! { <p class="status">{text}</p> })
}
