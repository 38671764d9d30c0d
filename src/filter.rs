//! Todo Filter
//!
//! Search-box filtering applied at render time.

use crate::models::Todo;

/// Keep todos whose title contains `filter`, ignoring case.
///
/// An empty filter returns the list unchanged; order is always preserved.
pub fn filter_todos(todos: Option<&[Todo]>, filter: &str) -> Vec<Todo> {
    let Some(todos) = todos.filter(|t| !t.is_empty()) else {
        return Vec::new();
    };
    if filter.is_empty() {
        return todos.to_vec();
    }

    let needle = filter.to_lowercase();
    todos
        .iter()
        .filter(|todo| todo.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
