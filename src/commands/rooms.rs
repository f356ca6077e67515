//! Room Endpoints
//!
//! Rooms are read-only from the client.

use task_view::{ApiResult, Room};

use super::HttpApi;

impl HttpApi {
    pub(super) async fn fetch_rooms(&self) -> ApiResult<Vec<Room>> {
        self.get_json("/rooms").await
    }
}
