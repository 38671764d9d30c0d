//! Todo List Component
//!
//! Renders the filtered todos with toggle, edit and delete affordances.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::filter::filter_todos;
use crate::models::Todo;
use crate::store::TodoViewStateStoreFields;

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_context().store;

    let visible = move || {
        let search = store.search().get();
        store.todos().with(|todos| filter_todos(Some(todos.as_slice()), &search))
    };

    view! {
        <ul class="todo-list">
            <For
                each=visible
                // All mutable fields, so a changed record re-renders
                key=|todo| (todo.id, todo.title.clone(), todo.completed)
                children=move |todo| view! { <TodoRow todo=todo /> }
            />
        </ul>
    }
}

/// Completion state of `id` in the last fetched list
fn is_completed(todos: &[Todo], id: u32) -> bool {
    todos.iter().any(|todo| todo.id == id && todo.completed)
}

fn delete_prompt(title: &str) -> String {
    format!("Delete \"{}\"?", title)
}

/// A single todo row
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let (confirming, set_confirming) = signal(false);

    let id = todo.id;
    let prompt = delete_prompt(&todo.title);
    let title = todo.title.clone();
    let for_toggle = todo.clone();
    let for_edit = todo;

    // Follows the store, so a failed toggle puts the box back
    let completed = move || store.todos().with(|todos| is_completed(todos, id));

    view! {
        <li class=move || if completed() { "todo-row completed" } else { "todo-row" }>
            <input
                type="checkbox"
                prop:checked=completed
                on:change=move |_| {
                    let mut record = for_toggle.clone();
                    ctx.run(move |c| async move { c.toggle_completion(&mut record).await });
                }
            />

            <span class="todo-title">{title}</span>

            <button class="edit-btn" on:click=move |_| {
                ctx.controller().begin_edit(&for_edit);
                ctx.publish();
            }>"Edit"</button>

            <Show
                when=move || confirming.get()
                fallback=move || view! {
                    <button class="delete-btn" title="Delete" on:click=move |_| set_confirming.set(true)>
                        "×"
                    </button>
                }
            >
                <span class="delete-confirm">
                    <span class="delete-confirm-text">{prompt.clone()}</span>
                    <button class="confirm-btn" on:click=move |_| {
                        set_confirming.set(false);
                        ctx.run(move |c| async move { c.delete(id).await });
                    }>"Yes"</button>
                    <button class="cancel-btn" on:click=move |_| set_confirming.set(false)>"No"</button>
                </span>
            </Show>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_completed_follows_list() {
        let mut done = Todo::new(2, "Done");
        done.completed = true;
        let todos = vec![Todo::new(1, "Open"), done];

        assert!(!is_completed(&todos, 1));
        assert!(is_completed(&todos, 2));
        assert!(!is_completed(&todos, 3));
    }

    #[test]
    fn test_delete_prompt_names_todo() {
        assert_eq!(delete_prompt("Buy milk"), "Delete \"Buy milk\"?");
    }
}
