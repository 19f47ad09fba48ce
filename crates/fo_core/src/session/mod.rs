//! Session state and request orchestration for the analysis view.
//!
//! One [`AnalysisSession`] exists per visit to the analysis view. It owns
//! the mutable [`SessionState`], sequences each user-triggered operation
//! against the transport, and exposes the [`ViewState`] projection the
//! rendering layer consumes.

mod orchestrator;
mod state;
mod view;

pub use orchestrator::{AnalysisSession, NO_FILE_MESSAGE};
pub use state::{OperationFlags, Panel, SessionState};
pub use view::ViewState;
