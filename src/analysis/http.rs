//! HTTP implementation of the Analysis Service.
//!
//! Two endpoints, both JSON:
//! - `POST {base}/analyze` with `{"text": ...}` → one analysis
//! - `GET  {base}/history` → array of past analyses
//!
//! The request timeout is baked into the `reqwest::Client` so neither call
//! can leave the session busy indefinitely; a hit deadline surfaces as
//! `ServiceError::Timeout`.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use super::service::{AnalysisService, ServiceError};
use super::types::{AnalyzeRequest, AnalysisResult, HistoryEntry};

/// Client for the MoodLens analysis backend.
pub struct HttpAnalysisService {
    base_url: String,
    client: reqwest::Client,
}

impl HttpAnalysisService {
    /// Create a client against `base_url` (no trailing slash) with the given
    /// per-request deadline.
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client with timeout ({e}), using defaults");
                reqwest::Client::new()
            });

        Self { base_url, client }
    }

    fn classify(e: reqwest::Error) -> ServiceError {
        if e.is_timeout() {
            ServiceError::Timeout
        } else {
            ServiceError::Network(e.to_string())
        }
    }

    /// Check the status, then read and parse the body.
    ///
    /// Reading text first (instead of `Response::json`) keeps transport
    /// failures and malformed bodies as distinct log lines.
    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ServiceError> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Service error: {} - {}", status.as_u16(), message);
            return Err(ServiceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await.map_err(Self::classify)?;
        debug!("Response body: {} bytes", body.len());
        serde_json::from_str(&body).map_err(|e| ServiceError::Parse(e.to_string()))
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisService {
    fn name(&self) -> &str {
        "http"
    }

    async fn analyze(&self, text: &str) -> Result<AnalysisResult, ServiceError> {
        info!("Analyze request: {} chars", text.len());

        let request = AnalyzeRequest {
            text: text.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/analyze", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(Self::classify)?;

        debug!("Analyze response status: {}", response.status());
        let result: AnalysisResult = Self::read_json(response).await?;
        info!("Analyze complete: mood={}", result.mood);
        Ok(result)
    }

    async fn history(&self) -> Result<Vec<HistoryEntry>, ServiceError> {
        debug!("History request");

        let response = self
            .client
            .get(format!("{}/history", self.base_url))
            .send()
            .await
            .map_err(Self::classify)?;

        debug!("History response status: {}", response.status());
        let entries: Vec<HistoryEntry> = Self::read_json(response).await?;
        info!("History loaded: {} entries", entries.len());
        Ok(entries)
    }
}
