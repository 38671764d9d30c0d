//! Todo Frontend App
//!
//! Root component: wires the service, controller and view store.

use leptos::prelude::*;
use reactive_stores::Store;
use tracing::info;

use crate::components::{SearchBox, TodoForm, TodoList};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::controller::DisplayController;
use crate::filter::filter_todos;
use crate::service::HttpTodoService;
use crate::store::{TodoViewState, TodoViewStateStoreFields};

pub const APP_TITLE: &str = "toDoApp";

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    info!(base_url = %config.base_url, "starting {}", APP_TITLE);

    let controller = DisplayController::new(HttpTodoService::new(&config));
    let store = Store::new(TodoViewState::default());
    let ctx = AppContext::new(controller, store);

    // Provide context to all children
    provide_context(ctx);

    // Load todos on mount
    Effect::new(move |_| {
        ctx.run(|c| async move { c.initialize().await });
    });

    let count_line = move || {
        let search = store.search().get();
        store.todos().with(|todos| {
            let shown = filter_todos(Some(todos.as_slice()), &search).len();
            format!("{} of {} todos", shown, todos.len())
        })
    };

    view! {
        <main class="todo-app">
            <h1 class="content">{APP_TITLE}</h1>

            <TodoForm />
            <SearchBox />
            <TodoList />

            <p class="todo-count">{count_line}</p>
        </main>
    }
}
