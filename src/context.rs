//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::error;

use crate::controller::DisplayController;
use crate::error::{TodoError, TodoResult};
use crate::service::HttpTodoService;
use crate::store::{store_publish, TodoStore};

pub type Controller = DisplayController<HttpTodoService>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Display controller, local to the browser thread
    controller: StoredValue<Rc<Controller>, LocalStorage>,
    /// Rendered view state
    pub store: TodoStore,
}

impl AppContext {
    pub fn new(controller: Controller, store: TodoStore) -> Self {
        Self {
            controller: StoredValue::new_local(Rc::new(controller)),
            store,
        }
    }

    pub fn controller(&self) -> Rc<Controller> {
        self.controller.get_value()
    }

    /// Push the controller's current state into the store
    pub fn publish(&self) {
        let snapshot = self.controller.with_value(|c| c.snapshot());
        store_publish(&self.store, snapshot);
    }

    /// Run a controller operation in the background, then refresh the view
    pub fn run<F, Fut>(&self, op: F)
    where
        F: FnOnce(Rc<Controller>) -> Fut + 'static,
        Fut: Future<Output = TodoResult<()>> + 'static,
    {
        let ctx = *self;
        let controller = self.controller();
        spawn_local(async move {
            let result = op(controller).await;
            ctx.publish();
            if let Err(err) = result {
                report_error(&err);
            }
        });
    }
}

/// Validation problems go to the user; everything else to the console
fn report_error(err: &TodoError) {
    match err {
        TodoError::InvalidTitle => {
            let _ = window().alert_with_message(&err.to_string());
        }
        _ => error!(%err, "todo request failed"),
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
