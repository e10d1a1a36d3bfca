//! HTTP Client
//!
//! `BoardApi` over reqwest. On wasm32 reqwest drives the browser's `fetch`.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{task_path, BoardApi, NOTE_PATH, TASKS_PATH};
use crate::config::BoardConfig;
use crate::error::{FetchError, FetchResult};
use crate::models::{Category, NewTask, Note, Task, TaskId, TaskPatch};

#[derive(Serialize)]
struct NoteBody<'a> {
    content: &'a str,
}

#[derive(Clone, Debug)]
pub struct HttpApi {
    client: Client,
    config: BoardConfig,
}

impl HttpApi {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Send a request and reject any non-2xx response.
    async fn execute(&self, method: &'static str, url: &str, request: RequestBuilder) -> FetchResult<Response> {
        let response = request.send().await.map_err(|e| FetchError::Network {
            method,
            url: url.to_string(),
            message: e.to_string(),
        })?;
        check_status(method, url, response.status().as_u16())?;
        Ok(response)
    }

    async fn execute_json<T: DeserializeOwned>(
        &self,
        method: &'static str,
        url: &str,
        request: RequestBuilder,
    ) -> FetchResult<T> {
        let response = self.execute(method, url, request).await?;
        response.json::<T>().await.map_err(|e| FetchError::Decode {
            method,
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

fn check_status(method: &'static str, url: &str, status: u16) -> FetchResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::Status {
            method,
            url: url.to_string(),
            status,
        })
    }
}

#[async_trait(?Send)]
impl BoardApi for HttpApi {
    async fn list_tasks(&self) -> FetchResult<Vec<Task>> {
        let url = self.config.url(TASKS_PATH);
        self.execute_json("GET", &url, self.client.get(&url)).await
    }

    async fn create_task(&self, content: &str, category: Category) -> FetchResult<Task> {
        let url = self.config.url(TASKS_PATH);
        let body = NewTask { content, category };
        self.execute_json("POST", &url, self.client.post(&url).json(&body)).await
    }

    async fn update_task(&self, id: TaskId, patch: &TaskPatch) -> FetchResult<Task> {
        let url = self.config.url(&task_path(id));
        self.execute_json("PUT", &url, self.client.put(&url).json(patch)).await
    }

    async fn delete_task(&self, id: TaskId) -> FetchResult<()> {
        let url = self.config.url(&task_path(id));
        self.execute("DELETE", &url, self.client.delete(&url)).await?;
        Ok(())
    }

    async fn get_note(&self) -> FetchResult<Note> {
        let url = self.config.url(NOTE_PATH);
        self.execute_json("GET", &url, self.client.get(&url)).await
    }

    async fn update_note(&self, content: &str) -> FetchResult<Note> {
        let url = self.config.url(NOTE_PATH);
        let body = NoteBody { content };
        self.execute_json("PUT", &url, self.client.put(&url).json(&body)).await
    }
}
