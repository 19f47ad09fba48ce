//! HTTP transport for the analysis service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::AppConfig;
use crate::models::SignalRecord;

use super::error::ApiError;
use super::types::{
    AnalyzeRequest, ClassResponse, DurationResponse, ErrorEnvelope, MessageResponse,
    SourceResponse, UploadResponse,
};
use super::AnalysisBackend;

/// reqwest-backed implementation of [`AnalysisBackend`].
#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    client: Client,
    base_url: String,
}

impl HttpAnalysisClient {
    /// Create a client against the given base URL.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// Create a client from the application configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, ApiError> {
        Self::new(
            config.api_base_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Read a response body, converting non-success statuses into
/// [`ApiError::Status`] with the service's `detail` message when the error
/// envelope is parseable.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let detail = serde_json::from_str::<ErrorEnvelope>(&body)
            .ok()
            .map(|envelope| envelope.detail);
        return Err(ApiError::status(status, detail));
    }

    Ok(serde_json::from_str(&body)?)
}

#[async_trait]
impl AnalysisBackend for HttpAnalysisClient {
    async fn upload(&self, file_name: &str, content: Vec<u8>) -> Result<UploadResponse, ApiError> {
        let url = self.endpoint("/api/upload");
        debug!(%url, file_name, bytes = content.len(), "uploading capture");

        let part = Part::bytes(content).file_name(file_name.to_string());
        let form = Form::new().part("file", part);
        let response = self.client.post(&url).multipart(form).send().await?;
        read_json(response).await
    }

    async fn analyze(
        &self,
        file_id: &str,
        request: &AnalyzeRequest,
    ) -> Result<Vec<SignalRecord>, ApiError> {
        let url = self.endpoint(&format!("/api/analyze/{file_id}"));
        debug!(%url, generators = request.generators.len(), "requesting time series");

        let response = self.client.post(&url).json(request).send().await?;
        read_json(response).await
    }

    async fn detect_duration(&self) -> Result<DurationResponse, ApiError> {
        let url = self.endpoint("/api/detect_duration");
        debug!(%url, "requesting oscillation window");

        let response = self.client.get(&url).send().await?;
        read_json(response).await
    }

    async fn predict_class(&self) -> Result<ClassResponse, ApiError> {
        let url = self.endpoint("/api/predict_class");
        debug!(%url, "requesting classification");

        let response = self.client.get(&url).send().await?;
        read_json(response).await
    }

    async fn locate_source(&self) -> Result<SourceResponse, ApiError> {
        let url = self.endpoint("/api/locate_source");
        debug!(%url, "requesting source localization");

        let response = self.client.get(&url).send().await?;
        read_json(response).await
    }

    async fn clear_files(&self) -> Result<String, ApiError> {
        let url = self.endpoint("/api/files/clear");
        debug!(%url, "clearing stored captures");

        let response = self.client.delete(&url).send().await?;
        let confirmation: MessageResponse = read_json(response).await?;
        Ok(confirmation.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let client =
            HttpAnalysisClient::new("http://127.0.0.1:8000/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
        assert_eq!(
            client.endpoint("/api/upload"),
            "http://127.0.0.1:8000/api/upload"
        );
    }

    #[test]
    fn builds_from_config() {
        let config = AppConfig::default();
        let client = HttpAnalysisClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), config.api_base_url);
    }
}
