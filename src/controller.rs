//! Display Controller
//!
//! Holds the todo list UI state and orchestrates service calls.
//! Every successful mutation ends with a full re-fetch of the list;
//! entries are never patched locally.

use std::cell::RefCell;

use tracing::{debug, info, warn};

use crate::error::{TodoError, TodoResult};
use crate::form::TitleField;
use crate::models::Todo;
use crate::service::TodoApi;

/// Everything the view renders from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayState {
    /// Last list fetched from the backend
    pub todos: Vec<Todo>,
    /// Record being edited
    pub edit_target: Option<Todo>,
    /// Whether the form is in edit mode
    pub editing: bool,
    /// Title form field
    pub form: TitleField,
}

pub struct DisplayController<A> {
    api: Option<A>,
    state: RefCell<DisplayState>,
}

impl<A: TodoApi> DisplayController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api: Some(api),
            state: RefCell::new(DisplayState::default()),
        }
    }

    /// Controller with no backend wired in; loads degrade to an empty list
    pub fn without_service() -> Self {
        Self {
            api: None,
            state: RefCell::new(DisplayState::default()),
        }
    }

    fn api(&self) -> TodoResult<&A> {
        self.api.as_ref().ok_or(TodoError::ServiceUnavailable)
    }

    // The state borrow is never held across an await: overlapping
    // operations may interleave and the last re-fetch to land wins.
    async fn refresh(&self) -> TodoResult<()> {
        let todos = self.api()?.list().await?;
        debug!(count = todos.len(), "todos reloaded");
        self.state.borrow_mut().todos = todos;
        Ok(())
    }

    /// Initial load
    pub async fn initialize(&self) -> TodoResult<()> {
        if self.api.is_none() {
            warn!("todo service not available, starting with an empty list");
            return Ok(());
        }
        self.refresh().await
    }

    pub async fn delete(&self, id: u32) -> TodoResult<()> {
        self.api()?.delete(id).await?;
        info!(id, "todo deleted");
        self.refresh().await
    }

    /// Load a record into the form for editing
    pub fn begin_edit(&self, todo: &Todo) {
        let mut state = self.state.borrow_mut();
        state.form.set(todo.title.clone());
        state.edit_target = Some(todo.clone());
        state.editing = true;
    }

    pub fn cancel_edit(&self) {
        let mut state = self.state.borrow_mut();
        state.edit_target = None;
        state.editing = false;
        state.form.reset();
    }

    /// Rename the edit target (or a placeholder when none is selected)
    pub async fn submit_edit(&self, new_title: &str) -> TodoResult<()> {
        let api = self.api()?;
        let target = {
            let mut state = self.state.borrow_mut();
            let target = state.edit_target.get_or_insert_with(Todo::placeholder);
            target.title = new_title.to_string();
            target.clone()
        };

        api.update(&target).await?;
        info!(id = target.id, "todo updated");
        self.refresh().await?;

        let mut state = self.state.borrow_mut();
        state.editing = !state.editing;
        state.form.reset();
        Ok(())
    }

    /// Create a todo from the submitted title
    ///
    /// Titles that are empty or only whitespace are rejected before any
    /// request. The new id is `todos.len() + 1`; it can collide with a
    /// server id once records have been deleted.
    pub async fn submit_new(&self, title: &str) -> TodoResult<()> {
        if title.trim().is_empty() {
            warn!("rejected blank todo title");
            return Err(TodoError::InvalidTitle);
        }
        let api = self.api()?;
        let next_id = self.state.borrow().todos.len() as u32 + 1;
        let todo = Todo::new(next_id, title);

        api.create(&todo).await?;
        info!(id = todo.id, "todo created");
        self.refresh().await?;

        self.state.borrow_mut().form.reset();
        Ok(())
    }

    /// Flip `completed` on the caller's record and push it to the backend
    pub async fn toggle_completion(&self, todo: &mut Todo) -> TodoResult<()> {
        let api = self.api()?;
        todo.completed = !todo.completed;
        api.update(todo).await?;
        debug!(id = todo.id, completed = todo.completed, "todo toggled");
        self.refresh().await
    }

    pub fn set_form_title(&self, title: &str) {
        self.state.borrow_mut().form.set(title);
    }

    pub fn form_title(&self) -> Option<String> {
        self.state.borrow().form.value().map(str::to_string)
    }

    pub fn todos(&self) -> Vec<Todo> {
        self.state.borrow().todos.clone()
    }

    pub fn edit_target(&self) -> Option<Todo> {
        self.state.borrow().edit_target.clone()
    }

    pub fn is_editing(&self) -> bool {
        self.state.borrow().editing
    }

    pub fn snapshot(&self) -> DisplayState {
        self.state.borrow().clone()
    }
}
