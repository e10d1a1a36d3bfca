//! REST Command Wrappers
//!
//! Frontend bindings to the board's REST API.

mod http;

use async_trait::async_trait;

use crate::error::FetchResult;
use crate::models::{Category, Note, Task, TaskId, TaskPatch};

pub use http::HttpApi;

// ========================
// Routes
// ========================

pub const TASKS_PATH: &str = "/api/tasks";
pub const NOTE_PATH: &str = "/api/note";

pub fn task_path(id: TaskId) -> String {
    format!("{}/{}", TASKS_PATH, id)
}

// ========================
// Client Trait
// ========================

/// Everything the board asks of the server.
///
/// Futures are not `Send`: in the browser they wrap `fetch` promises.
#[async_trait(?Send)]
pub trait BoardApi {
    /// `GET /api/tasks`
    async fn list_tasks(&self) -> FetchResult<Vec<Task>>;

    /// `POST /api/tasks`; the server assigns the id
    async fn create_task(&self, content: &str, category: Category) -> FetchResult<Task>;

    /// `PUT /api/tasks/{id}` with only the fields present in `patch`
    async fn update_task(&self, id: TaskId, patch: &TaskPatch) -> FetchResult<Task>;

    /// `DELETE /api/tasks/{id}`
    async fn delete_task(&self, id: TaskId) -> FetchResult<()>;

    /// `GET /api/note`
    async fn get_note(&self) -> FetchResult<Note>;

    /// `PUT /api/note`
    async fn update_note(&self, content: &str) -> FetchResult<Note>;
}
