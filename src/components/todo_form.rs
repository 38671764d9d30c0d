//! Todo Form Component
//!
//! Title input for creating todos, or renaming one in edit mode.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::TodoViewStateStoreFields;

#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = store.form_title().get_untracked();
        if store.editing().get_untracked() {
            ctx.run(move |c| async move { c.submit_edit(&title).await });
        } else {
            ctx.run(move |c| async move { c.submit_new(&title).await });
        }
    };

    let on_cancel = move |_: web_sys::MouseEvent| {
        ctx.controller().cancel_edit();
        ctx.publish();
    };

    view! {
        <form class="todo-form" on:submit=on_submit>
            <input
                type="text"
                name="title"
                placeholder="What needs to be done?"
                autocomplete="off"
                prop:value=move || store.form_title().get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ctx.controller().set_form_title(&value);
                    *store.form_title().write() = value;
                }
            />
            <button type="submit">
                {move || if store.editing().get() { "Update" } else { "Add" }}
            </button>
            <Show when=move || store.editing().get()>
                <button type="button" class="cancel-btn" on:click=on_cancel>
                    "Cancel"
                </button>
            </Show>
        </form>
    }
}
