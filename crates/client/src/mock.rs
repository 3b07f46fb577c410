use async_trait::async_trait;
use availability_core::models::api::{ApiResponse, SaveScheduleRequest, ScheduleData};
use mockall::mock;

use crate::ScheduleApi;

// Mock schedule API for testing
mock! {
    pub ScheduleApi {}

    #[async_trait]
    impl ScheduleApi for ScheduleApi {
        async fn fetch_schedule(&self) -> eyre::Result<ApiResponse<ScheduleData>>;

        async fn save_schedule(
            &self,
            request: SaveScheduleRequest,
        ) -> eyre::Result<ApiResponse<serde_json::Value>>;
    }
}
