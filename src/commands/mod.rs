//! Backend HTTP Client
//!
//! `ChoreApi` over the REST backend, organized by resource. Success is
//! decided by HTTP status; error bodies carry `{error: string}`.

mod tasks;
mod roommates;
mod rooms;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use task_view::{ApiError, ApiResult, ChoreApi, NewRoommate, NewTask, Room, Roommate, Task, TaskStatus};

#[derive(Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: &'static str,
}

fn transport(e: reqwest::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

impl HttpApi {
    pub fn new(base_url: &'static str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-2xx response into `Rejected`, reading its `{error}` body
    async fn check(response: reqwest::Response) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::rejected(status.as_u16(), &body))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        log::debug!("GET {}", path);
        let response = self.client.get(self.url(path)).send().await.map_err(transport)?;
        let body = Self::check(response).await?.text().await.map_err(transport)?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<()> {
        log::debug!("POST {}", path);
        let response = self.client.post(self.url(path)).json(body).send().await.map_err(transport)?;
        Self::check(response).await.map(|_| ())
    }

    async fn put_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<()> {
        log::debug!("PUT {}", path);
        let response = self.client.put(self.url(path)).json(body).send().await.map_err(transport)?;
        Self::check(response).await.map(|_| ())
    }

    async fn delete(&self, path: &str) -> ApiResult<()> {
        log::debug!("DELETE {}", path);
        let response = self.client.delete(self.url(path)).send().await.map_err(transport)?;
        Self::check(response).await.map(|_| ())
    }
}

#[async_trait(?Send)]
impl ChoreApi for HttpApi {
    async fn list_rooms(&self) -> ApiResult<Vec<Room>> {
        self.fetch_rooms().await
    }

    async fn list_roommates(&self) -> ApiResult<Vec<Roommate>> {
        self.fetch_roommates().await
    }

    async fn create_roommate(&self, roommate: &NewRoommate) -> ApiResult<()> {
        self.post_roommate(roommate).await
    }

    async fn delete_roommate(&self, id: u32) -> ApiResult<()> {
        self.remove_roommate(id).await
    }

    async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
        self.fetch_tasks().await
    }

    async fn create_task(&self, task: &NewTask) -> ApiResult<()> {
        self.post_task(task).await
    }

    async fn update_task_status(&self, id: u32, status: TaskStatus) -> ApiResult<()> {
        self.put_task_status(id, status).await
    }

    async fn delete_task(&self, id: u32) -> ApiResult<()> {
        self.remove_task(id).await
    }
}
