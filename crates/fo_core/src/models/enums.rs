//! Core enums used throughout the application.

use serde::{Deserialize, Serialize};

/// Measured electrical property of a generator signal.
///
/// The codes match the column prefixes used by the analysis service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalProperty {
    /// Active power.
    P,
    /// Reactive power.
    Q,
    /// Voltage magnitude.
    V,
    /// Voltage angle.
    A,
}

impl SignalProperty {
    /// Single-letter wire code for this property.
    pub fn code(&self) -> &'static str {
        match self {
            Self::P => "P",
            Self::Q => "Q",
            Self::V => "V",
            Self::A => "A",
        }
    }

    /// Human-readable label for selection lists.
    pub fn label(&self) -> &'static str {
        match self {
            Self::P => "Power",
            Self::Q => "Reactive Power",
            Self::V => "Voltage Magnitude",
            Self::A => "Voltage Angle",
        }
    }

    /// All properties, in display order.
    pub fn all() -> &'static [SignalProperty] {
        &[Self::P, Self::Q, Self::V, Self::A]
    }

    /// Parse a wire code back to a property.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "P" => Some(Self::P),
            "Q" => Some(Self::Q),
            "V" => Some(Self::V),
            "A" => Some(Self::A),
            _ => None,
        }
    }
}

impl std::fmt::Display for SignalProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Classification verdict for an uploaded capture.
///
/// The service encodes the class as a label string where "0" means a
/// natural oscillation and any other label a forced one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OscillationClass {
    Natural,
    Forced,
}

impl OscillationClass {
    /// Map the service's encoded label to a class.
    pub fn from_backend_label(label: &str) -> Self {
        if label.trim() == "0" {
            Self::Natural
        } else {
            Self::Forced
        }
    }

    /// Human-readable name for the classification panel.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Natural => "Natural Oscillation",
            Self::Forced => "Forced Oscillation",
        }
    }
}

impl std::fmt::Display for OscillationClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_codes_round_trip() {
        for prop in SignalProperty::all() {
            assert_eq!(SignalProperty::from_code(prop.code()), Some(*prop));
        }
        assert_eq!(SignalProperty::from_code("X"), None);
    }

    #[test]
    fn property_serializes_as_code() {
        let json = serde_json::to_string(&SignalProperty::Q).unwrap();
        assert_eq!(json, "\"Q\"");
    }

    #[test]
    fn property_labels() {
        assert_eq!(SignalProperty::P.label(), "Power");
        assert_eq!(SignalProperty::A.label(), "Voltage Angle");
    }

    #[test]
    fn class_label_zero_is_natural() {
        assert_eq!(
            OscillationClass::from_backend_label("0"),
            OscillationClass::Natural
        );
    }

    #[test]
    fn class_label_other_is_forced() {
        assert_eq!(
            OscillationClass::from_backend_label("1"),
            OscillationClass::Forced
        );
        assert_eq!(
            OscillationClass::from_backend_label("2"),
            OscillationClass::Forced
        );
    }

    #[test]
    fn class_display_names() {
        assert_eq!(OscillationClass::Forced.to_string(), "Forced Oscillation");
    }
}
