//! View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! The display controller owns the state; the store is its rendered mirror.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::controller::DisplayState;
use crate::models::Todo;

/// State the components render from, field-level reactive
#[derive(Clone, Debug, Default, Store)]
pub struct TodoViewState {
    /// Todos from the last successful fetch
    pub todos: Vec<Todo>,
    /// Form is editing an existing todo
    pub editing: bool,
    /// Text shown in the title input
    pub form_title: String,
    /// Search box text, never leaves the view
    pub search: String,
}

/// Type alias for the store
pub type TodoStore = Store<TodoViewState>;

/// Copy a controller snapshot into the store
pub fn store_publish(store: &TodoStore, state: DisplayState) {
    *store.todos().write() = state.todos;
    *store.editing().write() = state.editing;
    *store.form_title().write() = state.form.value().unwrap_or_default().to_string();
}
