//! Remote analysis service client.
//!
//! The service is consumed behind the [`AnalysisBackend`] trait so the
//! orchestration layer can run against a fake transport in tests. The real
//! transport is [`HttpAnalysisClient`].

mod error;
mod http;
mod types;

pub use error::ApiError;
pub use http::HttpAnalysisClient;
pub use types::{
    AnalyzeRequest, ClassResponse, DurationResponse, SourceResponse, UploadResponse,
};

use async_trait::async_trait;

use crate::models::SignalRecord;

/// Operations offered by the analysis service.
///
/// All request bodies are in backend naming space; translation to and from
/// display space happens above this trait.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Upload a signal capture (CSV or XLSX) and receive a file id.
    async fn upload(&self, file_name: &str, content: Vec<u8>) -> Result<UploadResponse, ApiError>;

    /// Fetch the selected time-series columns for an uploaded capture.
    async fn analyze(
        &self,
        file_id: &str,
        request: &AnalyzeRequest,
    ) -> Result<Vec<SignalRecord>, ApiError>;

    /// Detect the oscillation window and render the four plots.
    async fn detect_duration(&self) -> Result<DurationResponse, ApiError>;

    /// Classify the most recent capture as natural or forced.
    async fn predict_class(&self) -> Result<ClassResponse, ApiError>;

    /// Locate the generator driving the oscillation.
    async fn locate_source(&self) -> Result<SourceResponse, ApiError>;

    /// Delete every capture stored on the service.
    async fn clear_files(&self) -> Result<String, ApiError>;
}
