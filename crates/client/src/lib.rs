//! # Availability Client
//!
//! Talks to the remote agent time-schedule API. The scheduler only sees the
//! [`ScheduleApi`] trait, so tests can swap in [`mock::MockScheduleApi`].

/// Environment configuration for the client
pub mod config;
/// reqwest implementation of the schedule API
pub mod http;
/// mockall double of the schedule API
pub mod mock;

use async_trait::async_trait;
use availability_core::models::api::{ApiResponse, SaveScheduleRequest, ScheduleData};
use eyre::Result;

pub use http::HttpScheduleApi;

/// The two schedule endpoints the availability editor depends on.
///
/// Implementations report transport and decoding failures as `Err`. A
/// response the backend flagged as an error is still `Ok` and has to be
/// checked with [`ApiResponse::is_success`].
#[async_trait]
pub trait ScheduleApi: Send + Sync {
    /// `GET schedule`: the agent's recurring slots and date-specific extra slots.
    async fn fetch_schedule(&self) -> Result<ApiResponse<ScheduleData>>;

    /// `POST schedule`: replaces the recurring slots and deletes `deletedSlots`.
    async fn save_schedule(&self, request: SaveScheduleRequest) -> Result<ApiResponse<serde_json::Value>>;
}
