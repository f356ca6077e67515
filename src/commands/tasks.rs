//! Task Endpoints

use task_view::{ApiResult, NewTask, StatusUpdate, Task, TaskStatus};

use super::HttpApi;

impl HttpApi {
    pub(super) async fn fetch_tasks(&self) -> ApiResult<Vec<Task>> {
        self.get_json("/tasks").await
    }

    pub(super) async fn post_task(&self, task: &NewTask) -> ApiResult<()> {
        self.post_json("/tasks", task).await
    }

    pub(super) async fn put_task_status(&self, id: u32, status: TaskStatus) -> ApiResult<()> {
        self.put_json(&format!("/tasks/{}", id), &StatusUpdate { status }).await
    }

    pub(super) async fn remove_task(&self, id: u32) -> ApiResult<()> {
        self.delete(&format!("/tasks/{}", id)).await
    }
}
