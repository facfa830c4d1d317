use std::env;
use std::time::Duration;

use reqwest::Client;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::modules::call_details::model::CallRecord;

const DEFAULT_BASE_URL: &str = "https://api.vapi.ai";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Error, Debug)]
pub enum CallDetailsError {
    #[error("Unable to reach VAPI: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("VAPI responded with an error: {0}")]
    ApiError(String),
    #[error("Missing API key")]
    MissingApiKey,
    #[error("Invalid response from VAPI: {0}")]
    InvalidResponse(String),
}

#[derive(Clone)]
pub struct VapiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl VapiClient {
    pub fn new() -> Result<Self, CallDetailsError> {
        let api_key = env::var("VAPI_API_KEY").map_err(|_| CallDetailsError::MissingApiKey)?;

        if api_key.is_empty() {
            return Err(CallDetailsError::MissingApiKey);
        }

        let base_url =
            env::var("VAPI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self::with_config(api_key, base_url)
    }

    pub fn with_config(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, CallDetailsError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    pub async fn fetch_call_details(
        &self,
        call_id: &str,
    ) -> Result<CallRecord, CallDetailsError> {
        let response = self
            .client
            .get(format!("{}/call/{}", self.base_url, call_id))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let detail = if error_text.is_empty() {
                status.to_string()
            } else {
                error_text
            };
            return Err(CallDetailsError::ApiError(detail));
        }

        let body = response.text().await?;
        let fields: Map<String, Value> = serde_json::from_str(&body)
            .map_err(|e| CallDetailsError::InvalidResponse(e.to_string()))?;

        Ok(CallRecord::new(fields))
    }
}
