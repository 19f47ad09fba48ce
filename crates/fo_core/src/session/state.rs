//! Session state container for one analysis view session.

use crate::models::{
    DurationResult, GeneratorId, OscillationClass, SignalProperty, SignalRecord, SourceResult,
};

/// Which result panel the view presents once nothing is in flight.
///
/// A single tagged value rather than independent booleans, so at most one
/// panel can ever be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Idle,
    Chart,
    DurationPlots,
    Classification,
    Source,
}

/// Per-operation in-flight flags.
///
/// More than one operation may be in flight at a time; nothing here
/// serializes user actions. Completion order decides the final state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperationFlags {
    pub analyzing: bool,
    pub detecting: bool,
    pub predicting: bool,
    pub locating: bool,
}

impl OperationFlags {
    /// Whether any operation is currently in flight.
    pub fn any(&self) -> bool {
        self.analyzing || self.detecting || self.predicting || self.locating
    }
}

/// Mutable state for a single visit to the analysis view.
///
/// Created when the view mounts, dropped when it unmounts, and mutated only
/// through [`AnalysisSession`](super::AnalysisSession) operations and the
/// selection toggles below. A superseded in-flight response still commits
/// when it completes (last writer wins); the view simply reflects whatever
/// settled last.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Id issued by the upload endpoint; operations refuse to run without it.
    pub file_id: Option<String>,
    /// Display-space generator selection.
    pub selected_generators: Vec<GeneratorId>,
    /// Property selection.
    pub selected_properties: Vec<SignalProperty>,
    pub flags: OperationFlags,
    /// Last failure message, cleared at the start of every operation.
    pub last_error: Option<String>,
    pub panel: Panel,
    /// Display-space time series; empty until the first successful analyze.
    pub time_series: Vec<SignalRecord>,
    pub duration: Option<DurationResult>,
    pub classification: Option<OscillationClass>,
    pub source: Option<SourceResult>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit the file id issued by the upload step.
    pub fn set_file_id(&mut self, file_id: impl Into<String>) {
        self.file_id = Some(file_id.into());
    }

    /// Add or remove a generator from the selection.
    pub fn toggle_generator(&mut self, id: GeneratorId) {
        match self.selected_generators.iter().position(|g| *g == id) {
            Some(index) => {
                self.selected_generators.remove(index);
            }
            None => self.selected_generators.push(id),
        }
    }

    /// Add or remove a property from the selection.
    pub fn toggle_property(&mut self, property: SignalProperty) {
        match self.selected_properties.iter().position(|p| *p == property) {
            Some(index) => {
                self.selected_properties.remove(index);
            }
            None => self.selected_properties.push(property),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_generator_adds_then_removes() {
        let mut state = SessionState::new();
        state.toggle_generator(GeneratorId::new("G2"));
        state.toggle_generator(GeneratorId::new("G5"));
        assert_eq!(state.selected_generators.len(), 2);

        state.toggle_generator(GeneratorId::new("G2"));
        assert_eq!(state.selected_generators, vec![GeneratorId::new("G5")]);
    }

    #[test]
    fn toggle_property_adds_then_removes() {
        let mut state = SessionState::new();
        state.toggle_property(SignalProperty::P);
        state.toggle_property(SignalProperty::P);
        assert!(state.selected_properties.is_empty());
    }

    #[test]
    fn flags_any() {
        let mut flags = OperationFlags::default();
        assert!(!flags.any());
        flags.locating = true;
        assert!(flags.any());
    }

    #[test]
    fn fresh_state_is_idle() {
        let state = SessionState::new();
        assert_eq!(state.panel, Panel::Idle);
        assert!(state.file_id.is_none());
        assert!(state.time_series.is_empty());
    }
}
