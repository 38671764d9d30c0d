//! Search Box Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::TodoViewStateStoreFields;

#[component]
pub fn SearchBox() -> impl IntoView {
    let store = use_app_context().store;

    view! {
        <input
            type="search"
            class="search-box"
            placeholder="Search todos..."
            prop:value=move || store.search().get()
            on:input=move |ev| *store.search().write() = event_target_value(&ev)
        />
    }
}
