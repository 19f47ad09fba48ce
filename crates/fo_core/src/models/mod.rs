//! Data model: property and class enums, generator identifiers, and the
//! result payloads committed to the session.

pub mod enums;
pub mod generators;
pub mod results;

pub use enums::{OscillationClass, SignalProperty};
pub use generators::{GeneratorId, DISPLAY_GENERATORS};
pub use results::{decode_plot_png, DurationPlots, DurationResult, SignalRecord, SourceResult};
