//! UI Components
//!
//! Reusable Leptos components.

mod todo_form;
mod search_box;
mod todo_list;

pub use todo_form::TodoForm;
pub use search_box::SearchBox;
pub use todo_list::{TodoList, TodoRow};
