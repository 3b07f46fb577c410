use std::time::Duration;

use async_trait::async_trait;
use availability_core::models::api::{ApiResponse, SaveScheduleRequest, ScheduleData};
use eyre::{Result, WrapErr};
use reqwest::{Client, RequestBuilder};
use tracing::debug;

use crate::{ScheduleApi, config::ClientConfig};

/// Schedule API backed by HTTP requests.
#[derive(Debug, Clone)]
pub struct HttpScheduleApi {
    client: Client,
    schedule_url: String,
    api_token: Option<String>,
}

impl HttpScheduleApi {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()
            .wrap_err("Failed to build HTTP client")?;

        Ok(Self {
            client,
            schedule_url: config.schedule_url(),
            api_token: config.api_token.clone(),
        })
    }

    pub fn schedule_url(&self) -> &str {
        &self.schedule_url
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl ScheduleApi for HttpScheduleApi {
    async fn fetch_schedule(&self) -> Result<ApiResponse<ScheduleData>> {
        debug!("Fetching schedule from {}", self.schedule_url);

        let response = self
            .authorize(self.client.get(&self.schedule_url))
            .send()
            .await
            .wrap_err("Failed to reach schedule API")?;

        let status = response.status();
        let body = response
            .json::<ApiResponse<ScheduleData>>()
            .await
            .wrap_err_with(|| format!("Unreadable schedule response (status {status})"))?;

        Ok(body)
    }

    async fn save_schedule(&self, request: SaveScheduleRequest) -> Result<ApiResponse<serde_json::Value>> {
        debug!(
            "Saving {} slots and deleting {} slots at {}",
            request.schedule.len(),
            request.deleted_slots.len(),
            self.schedule_url
        );

        let response = self
            .authorize(self.client.post(&self.schedule_url))
            .json(&request)
            .send()
            .await
            .wrap_err("Failed to reach schedule API")?;

        let status = response.status();
        let body = response
            .json::<ApiResponse<serde_json::Value>>()
            .await
            .wrap_err_with(|| format!("Unreadable save response (status {status})"))?;

        Ok(body)
    }
}
