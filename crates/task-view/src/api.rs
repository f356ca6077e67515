//! Backend Contract
//!
//! The REST collaborator seen as a trait, so the refetching actions can be
//! driven by the browser client or by an in-memory fake.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::forms::{NewRoommate, NewTask};
use crate::models::{Room, Roommate, Task, TaskStatus};

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never got an HTTP response
    #[error("Network error: {0}")]
    Transport(String),
    /// Non-2xx status; message comes from the `{error}` body when present
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("Invalid response: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ApiError {
    pub fn rejected(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .unwrap_or_else(|| format!("HTTP {}", status));
        ApiError::Rejected { status, message }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, ApiError::Rejected { .. })
    }
}

/// CRUD endpoints of the chore backend
#[async_trait(?Send)]
pub trait ChoreApi {
    /// `GET /rooms`
    async fn list_rooms(&self) -> ApiResult<Vec<Room>>;

    /// `GET /roommates`
    async fn list_roommates(&self) -> ApiResult<Vec<Roommate>>;

    /// `POST /roommates`
    async fn create_roommate(&self, roommate: &NewRoommate) -> ApiResult<()>;

    /// `DELETE /roommates/:id`
    async fn delete_roommate(&self, id: u32) -> ApiResult<()>;

    /// `GET /tasks`
    async fn list_tasks(&self) -> ApiResult<Vec<Task>>;

    /// `POST /tasks`
    async fn create_task(&self, task: &NewTask) -> ApiResult<()>;

    /// `PUT /tasks/:id` with `{status}`
    async fn update_task_status(&self, id: u32, status: TaskStatus) -> ApiResult<()>;

    /// `DELETE /tasks/:id`
    async fn delete_task(&self, id: u32) -> ApiResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_uses_server_message() {
        let err = ApiError::rejected(400, r#"{"error": "Name is required"}"#);
        assert_eq!(err.to_string(), "Name is required");
        assert!(err.is_rejected());
    }

    #[test]
    fn test_rejected_without_body() {
        assert_eq!(ApiError::rejected(500, "<html>").to_string(), "HTTP 500");
        assert_eq!(ApiError::rejected(404, r#"{"message": "gone"}"#).to_string(), "HTTP 404");
    }
}
