//! Roommate Endpoints

use task_view::{ApiResult, NewRoommate, Roommate};

use super::HttpApi;

impl HttpApi {
    pub(super) async fn fetch_roommates(&self) -> ApiResult<Vec<Roommate>> {
        self.get_json("/roommates").await
    }

    pub(super) async fn post_roommate(&self, roommate: &NewRoommate) -> ApiResult<()> {
        self.post_json("/roommates", roommate).await
    }

    pub(super) async fn remove_roommate(&self, id: u32) -> ApiResult<()> {
        self.delete(&format!("/roommates/{}", id)).await
    }
}
