//! Wire types for the analysis service endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::results::{png_data_uri, DurationPlots, DurationResult};

/// Error envelope the service attaches to non-success statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub detail: String,
}

/// Response to a successful upload.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub file_id: i64,
}

/// Confirmation message for administrative endpoints.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MessageResponse {
    pub message: String,
}

/// Body of the analyze request. Generator ids are in backend space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzeRequest {
    pub generators: Vec<String>,
    pub properties: Vec<String>,
}

/// Raw duration-detection payload. The window times are in seconds and the
/// four plots arrive as base64-encoded PNG bytes.
#[derive(Debug, Clone, Deserialize)]
pub struct DurationResponse {
    pub start_time: f64,
    pub end_time: f64,
    pub duration: f64,
    pub original_signal: String,
    pub detrended_signal: String,
    pub filtered_signal: String,
    pub cwt_power_with_anomalies: String,
}

impl DurationResponse {
    /// Convert into the committed result form, wrapping each plot as a
    /// displayable `data:` URI.
    pub fn into_result(self) -> DurationResult {
        DurationResult {
            start_time: self.start_time,
            end_time: self.end_time,
            duration: self.duration,
            plots: DurationPlots {
                original: png_data_uri(&self.original_signal),
                detrended: png_data_uri(&self.detrended_signal),
                filtered: png_data_uri(&self.filtered_signal),
                cwt: png_data_uri(&self.cwt_power_with_anomalies),
            },
        }
    }
}

/// Raw classification payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassResponse {
    #[serde(rename = "Predicted class")]
    pub predicted_class: String,
}

/// Raw source-localization payload.
///
/// `predicted_source` arrives as a bare number or a numeric string
/// depending on the service's label encoder; any other fields are carried
/// through for the display layer.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceResponse {
    pub predicted_source: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SourceResponse {
    /// Backend-space generator id, normalized to the `G{n}` form.
    pub fn backend_id(&self) -> String {
        match &self.predicted_source {
            Value::String(s) if s.starts_with('G') => s.clone(),
            Value::String(s) => format!("G{s}"),
            other => format!("G{other}"),
        }
    }
}
