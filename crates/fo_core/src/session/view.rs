//! Panel selection: projecting session state to render intent.

use crate::models::{DurationResult, OscillationClass, SignalRecord, SourceResult};

use super::state::{Panel, SessionState};

/// What the rendering layer should present, in strict precedence order:
/// loading masks everything, an error masks any panel, and otherwise the
/// selected panel shows with its committed result.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<'a> {
    /// At least one operation is in flight.
    Loading,
    /// The last operation failed and nothing is in flight.
    Error(&'a str),
    /// Source-localization result.
    Source(&'a SourceResult),
    /// Time-series chart data.
    Chart(&'a [SignalRecord]),
    /// Classification verdict.
    Classification(OscillationClass),
    /// Oscillation window and plots.
    DurationPlots(&'a DurationResult),
    /// Nothing to show yet.
    Idle,
}

impl SessionState {
    /// Project the current state to render intent.
    ///
    /// The in-flight check comes first so an error raised by a previous
    /// operation never shows while a new one is loading, and the error
    /// check comes before panel selection so a failure always replaces a
    /// stale result display.
    pub fn view(&self) -> ViewState<'_> {
        if self.flags.any() {
            return ViewState::Loading;
        }
        if let Some(message) = &self.last_error {
            return ViewState::Error(message);
        }
        match self.panel {
            Panel::Source => match &self.source {
                Some(result) => ViewState::Source(result),
                None => ViewState::Idle,
            },
            Panel::Chart => ViewState::Chart(&self.time_series),
            Panel::Classification => match self.classification {
                Some(class) => ViewState::Classification(class),
                None => ViewState::Idle,
            },
            Panel::DurationPlots => match &self.duration {
                Some(result) => ViewState::DurationPlots(result),
                None => ViewState::Idle,
            },
            Panel::Idle => ViewState::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeneratorId;
    use serde_json::Map;

    #[test]
    fn fresh_session_renders_idle() {
        let state = SessionState::new();
        assert_eq!(state.view(), ViewState::Idle);
    }

    #[test]
    fn loading_masks_error_and_panel() {
        let mut state = SessionState::new();
        state.panel = Panel::Chart;
        state.last_error = Some("boom".to_string());
        state.flags.detecting = true;
        assert_eq!(state.view(), ViewState::Loading);
    }

    #[test]
    fn error_masks_selected_panel() {
        let mut state = SessionState::new();
        state.panel = Panel::Chart;
        state.time_series = vec![Map::new()];
        state.last_error = Some("no data".to_string());
        assert_eq!(state.view(), ViewState::Error("no data"));
    }

    #[test]
    fn chart_panel_shows_time_series() {
        let mut state = SessionState::new();
        state.panel = Panel::Chart;
        let record: SignalRecord =
            serde_json::json!({ "timestamp": 0, "G2_P": 1.0 })
                .as_object()
                .unwrap()
                .clone();
        state.time_series = vec![record];
        match state.view() {
            ViewState::Chart(records) => assert_eq!(records.len(), 1),
            other => panic!("expected chart view, got {other:?}"),
        }
    }

    #[test]
    fn source_panel_without_result_falls_back_to_idle() {
        let mut state = SessionState::new();
        state.panel = Panel::Source;
        assert_eq!(state.view(), ViewState::Idle);

        state.source = Some(SourceResult {
            predicted_source: GeneratorId::new("G2"),
            extra: Map::new(),
        });
        match state.view() {
            ViewState::Source(result) => {
                assert_eq!(result.predicted_source, GeneratorId::new("G2"));
            }
            other => panic!("expected source view, got {other:?}"),
        }
    }

    #[test]
    fn classification_panel_shows_verdict() {
        let mut state = SessionState::new();
        state.panel = Panel::Classification;
        state.classification = Some(OscillationClass::Forced);
        assert_eq!(
            state.view(),
            ViewState::Classification(OscillationClass::Forced)
        );
    }
}
