//! Request orchestration for the four analysis operations.
//!
//! Every operation follows the same sequence: precondition check, state
//! transition (clear the previous error, raise the in-flight flag, select
//! the operation's panel before the call resolves so the loading view
//! renders in the right context), network call, response reshaping, commit.
//! Failures never escape: they are absorbed into `last_error`, and the
//! in-flight flag is dropped on every exit path.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::api::{AnalysisBackend, AnalyzeRequest, ApiError};
use crate::models::generators::to_display;
use crate::models::{GeneratorId, OscillationClass, SourceResult};
use crate::translate::{self, Direction};

use super::state::{Panel, SessionState};

/// Message shown when an operation is attempted before any upload.
pub const NO_FILE_MESSAGE: &str = "No file selected. Please upload a file first.";

const ANALYZE_FALLBACK: &str = "Failed to analyze data";
const DETECT_FALLBACK: &str = "Failed to detect oscillation";
const PREDICT_FALLBACK: &str = "Failed to predict class";
const LOCATE_FALLBACK: &str = "Failed to locate source";

/// Owns the session state and the transport for one visit to the analysis
/// view.
///
/// Operations mutate the state and return nothing; callers observe results
/// through [`SessionState::view`]. There is no cancellation and no request
/// generation counting: a response that was superseded by a later action
/// still commits when it arrives.
pub struct AnalysisSession {
    state: SessionState,
    backend: Arc<dyn AnalysisBackend>,
}

impl AnalysisSession {
    pub fn new(backend: Arc<dyn AnalysisBackend>) -> Self {
        Self {
            state: SessionState::new(),
            backend,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Mutable access for the selection toggles and the upload commit.
    pub fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }

    /// Fetch the selected time-series columns and commit them in display
    /// space.
    pub async fn run_analysis(&mut self) {
        let file_id = match self.state.file_id.clone() {
            Some(id) => id,
            None => {
                self.state.last_error = Some(NO_FILE_MESSAGE.to_string());
                return;
            }
        };

        self.state.last_error = None;
        self.state.flags.analyzing = true;
        self.state.panel = Panel::Chart;

        let request = AnalyzeRequest {
            generators: self
                .state
                .selected_generators
                .iter()
                .map(|gen| {
                    gen.backend_name()
                        .map(str::to_string)
                        .unwrap_or_else(|| gen.as_str().to_string())
                })
                .collect(),
            properties: self
                .state
                .selected_properties
                .iter()
                .map(|prop| prop.code().to_string())
                .collect(),
        };

        match self.backend.analyze(&file_id, &request).await {
            Ok(records) => {
                debug!(rows = records.len(), "time series committed");
                self.state.time_series = translate::rewrite_records(&records, Direction::ToDisplay);
            }
            Err(err) => self.fail("analyze", ANALYZE_FALLBACK, err),
        }

        self.state.flags.analyzing = false;
    }

    /// Detect the oscillation window and commit the timing plus the four
    /// plots.
    pub async fn detect_duration(&mut self) {
        if self.state.file_id.is_none() {
            self.state.last_error = Some(NO_FILE_MESSAGE.to_string());
            return;
        }

        self.state.last_error = None;
        self.state.duration = None;
        self.state.flags.detecting = true;
        self.state.panel = Panel::DurationPlots;

        match self.backend.detect_duration().await {
            Ok(response) => {
                debug!(
                    start = response.start_time,
                    end = response.end_time,
                    "oscillation window committed"
                );
                self.state.duration = Some(response.into_result());
            }
            Err(err) => self.fail("detect_duration", DETECT_FALLBACK, err),
        }

        self.state.flags.detecting = false;
    }

    /// Classify the capture as a natural or forced oscillation.
    pub async fn predict_class(&mut self) {
        if self.state.file_id.is_none() {
            self.state.last_error = Some(NO_FILE_MESSAGE.to_string());
            return;
        }

        self.state.last_error = None;
        self.state.flags.predicting = true;
        self.state.panel = Panel::Classification;

        match self.backend.predict_class().await {
            Ok(response) => {
                let class = OscillationClass::from_backend_label(&response.predicted_class);
                debug!(%class, "classification committed");
                self.state.classification = Some(class);
            }
            Err(err) => self.fail("predict_class", PREDICT_FALLBACK, err),
        }

        self.state.flags.predicting = false;
    }

    /// Locate the generator driving the oscillation and commit it in
    /// display space.
    pub async fn locate_source(&mut self) {
        if self.state.file_id.is_none() {
            self.state.last_error = Some(NO_FILE_MESSAGE.to_string());
            return;
        }

        self.state.last_error = None;
        self.state.source = None;
        self.state.flags.locating = true;
        self.state.panel = Panel::Source;

        match self.backend.locate_source().await {
            Ok(response) => {
                let backend_id = response.backend_id();
                // An id outside the known set stays as-is rather than
                // failing the whole operation.
                let predicted = to_display(&backend_id)
                    .map(GeneratorId::new)
                    .unwrap_or_else(|| GeneratorId::new(backend_id));
                debug!(source = %predicted, "source localization committed");
                self.state.source = Some(SourceResult {
                    predicted_source: predicted,
                    extra: response.extra,
                });
            }
            Err(err) => self.fail("locate_source", LOCATE_FALLBACK, err),
        }

        self.state.flags.locating = false;
    }

    fn fail(&mut self, operation: &str, fallback: &str, err: ApiError) {
        warn!(operation, error = %err, "operation failed");
        self.state.last_error = Some(err.user_message(fallback));
    }
}
