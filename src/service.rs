//! Todo Service
//!
//! REST bindings for the `/todos` resource.
//! One HTTP request per call; no retry, caching or batching.

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::debug;

use crate::config::AppConfig;
use crate::error::{TodoError, TodoResult};
use crate::models::{Ack, Todo};

/// CRUD contract the display controller depends on.
///
/// `?Send` because every call runs on the browser's single event loop.
#[async_trait(?Send)]
pub trait TodoApi {
    /// GET /todos
    async fn list(&self) -> TodoResult<Vec<Todo>>;

    /// POST /todos
    async fn create(&self, todo: &Todo) -> TodoResult<Ack>;

    /// PUT /todos/{id}
    async fn update(&self, todo: &Todo) -> TodoResult<Ack>;

    /// DELETE /todos/{id}
    async fn delete(&self, id: u32) -> TodoResult<Ack>;
}

/// `TodoApi` over HTTP/JSON
#[derive(Debug, Clone)]
pub struct HttpTodoService {
    client: Client,
    base_url: String,
}

impl HttpTodoService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    pub fn collection_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    pub fn item_url(&self, id: u32) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }
}

/// Decode a mutation response; an empty body counts as a bare acknowledgement
async fn read_ack(response: Response) -> TodoResult<Ack> {
    let body = response.error_for_status()?.text().await?;
    if body.trim().is_empty() {
        return Ok(Ack::default());
    }
    Ok(serde_json::from_str(&body)?)
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoService {
    async fn list(&self) -> TodoResult<Vec<Todo>> {
        let url = self.collection_url();
        debug!(%url, "GET todos");
        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    async fn create(&self, todo: &Todo) -> TodoResult<Ack> {
        let url = self.collection_url();
        debug!(%url, id = todo.id, "POST todo");
        let response = self.client.post(&url).json(todo).send().await?;
        read_ack(response).await
    }

    async fn update(&self, todo: &Todo) -> TodoResult<Ack> {
        let url = self.item_url(todo.id);
        debug!(%url, "PUT todo");
        let response = self.client.put(&url).json(todo).send().await?;
        read_ack(response).await
    }

    async fn delete(&self, id: u32) -> TodoResult<Ack> {
        let url = self.item_url(id);
        debug!(%url, "DELETE todo");
        let response = self.client.delete(&url).send().await?;
        read_ack(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn service_for(server: &Server) -> HttpTodoService {
        HttpTodoService::new(&AppConfig::new(server.url()))
    }

    #[test]
    fn test_urls() {
        let service = HttpTodoService::new(&AppConfig::new("http://localhost:3000/"));
        assert_eq!(service.collection_url(), "http://localhost:3000/todos");
        assert_eq!(service.item_url(7), "http://localhost:3000/todos/7");
    }

    #[tokio::test]
    async fn test_list_todos() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/todos")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!([
                    { "id": 1, "userId": 1, "title": "Task 1", "completed": false },
                    { "id": 2, "userId": 1, "title": "Task 2", "completed": true }
                ])
                .to_string(),
            )
            .create_async()
            .await;

        let todos = service_for(&server).list().await.expect("list failed");

        mock.assert_async().await;
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].title, "Task 1");
        assert!(todos[1].completed);
    }

    #[tokio::test]
    async fn test_create_posts_record() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/todos")
            .match_body(Matcher::Json(
                json!({ "id": 3, "userId": 1, "title": "New Task", "completed": false }),
            ))
            .with_status(201)
            .with_body(r#"{"id": 3, "userId": 1, "title": "New Task", "completed": false}"#)
            .create_async()
            .await;

        let ack = service_for(&server)
            .create(&Todo::new(3, "New Task"))
            .await
            .expect("create failed");

        mock.assert_async().await;
        assert_eq!(ack, Ack::default());
    }

    #[tokio::test]
    async fn test_update_puts_to_item() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PUT", "/todos/1")
            .match_body(Matcher::PartialJson(json!({ "title": "Updated Task", "completed": true })))
            .with_status(200)
            .with_body(r#"{"message": "Successfully updated"}"#)
            .create_async()
            .await;

        let mut todo = Todo::new(1, "Updated Task");
        todo.completed = true;
        let ack = service_for(&server).update(&todo).await.expect("update failed");

        mock.assert_async().await;
        assert_eq!(ack.message.as_deref(), Some("Successfully updated"));
    }

    #[tokio::test]
    async fn test_delete_item() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("DELETE", "/todos/1")
            .with_status(200)
            .with_body("")
            .create_async()
            .await;

        let ack = service_for(&server).delete(1).await.expect("delete failed");

        mock.assert_async().await;
        assert_eq!(ack, Ack::default());
    }

    #[tokio::test]
    async fn test_error_status_propagates() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("DELETE", "/todos/42")
            .with_status(404)
            .create_async()
            .await;

        let err = service_for(&server).delete(42).await.unwrap_err();
        assert_eq!(err, TodoError::Status(404));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Bind then drop a listener so the port is known to be closed
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let service = HttpTodoService::new(&AppConfig::new(format!("http://127.0.0.1:{}", port)));
        let err = service.list().await.unwrap_err();

        assert!(matches!(err, TodoError::Transport(_)), "unexpected error: {:?}", err);
    }

    #[tokio::test]
    async fn test_bad_list_body_is_decode_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/todos")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let err = service_for(&server).list().await.unwrap_err();
        assert!(matches!(err, TodoError::Decode(_)));
    }
}
