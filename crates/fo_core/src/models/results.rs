//! Result payloads committed to the session after successful operations.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::GeneratorId;

pub use crate::translate::SignalRecord;

const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// The four duration-detection plots, as `data:` URIs ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationPlots {
    pub original: String,
    pub detrended: String,
    pub filtered: String,
    pub cwt: String,
}

/// Oscillation window reported by duration detection, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationResult {
    pub start_time: f64,
    pub end_time: f64,
    pub duration: f64,
    pub plots: DurationPlots,
}

/// Source-localization verdict.
///
/// `predicted_source` is already translated to display space; any other
/// fields the service attached are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceResult {
    pub predicted_source: GeneratorId,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Wrap a base64 PNG payload as a displayable `data:` URI.
pub fn png_data_uri(payload: &str) -> String {
    format!("{PNG_DATA_URI_PREFIX}{payload}")
}

/// Decode a plot back to raw PNG bytes. Accepts either a `data:` URI or a
/// bare base64 payload.
pub fn decode_plot_png(uri: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let payload = uri.strip_prefix(PNG_DATA_URI_PREFIX).unwrap_or(uri);
    BASE64.decode(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_uri_wraps_payload() {
        let uri = png_data_uri("aGVsbG8=");
        assert_eq!(uri, "data:image/png;base64,aGVsbG8=");
    }

    #[test]
    fn decode_accepts_uri_and_bare_payload() {
        let bytes = b"not really a png".to_vec();
        let payload = BASE64.encode(&bytes);

        assert_eq!(decode_plot_png(&payload).unwrap(), bytes);
        assert_eq!(decode_plot_png(&png_data_uri(&payload)).unwrap(), bytes);
    }

    #[test]
    fn source_result_round_trips_extra_fields() {
        let json = serde_json::json!({
            "predicted_source": "G2",
            "confidence": 0.93,
        });
        let result: SourceResult = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(result.predicted_source, GeneratorId::new("G2"));
        assert_eq!(result.extra["confidence"], serde_json::json!(0.93));

        let back = serde_json::to_value(&result).unwrap();
        assert_eq!(back, json);
    }
}
