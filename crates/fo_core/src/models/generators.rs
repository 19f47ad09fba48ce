//! Generator identifiers and the fixed display/backend name mapping.
//!
//! The grid diagram shown to the user labels generators by their bus
//! position (G2, G5, ...), while the analysis service numbers them G1..G10
//! in column order. The two schemes are related by a fixed bijection that
//! never changes at runtime.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Display id / backend id pairs, in grid order.
const NAME_PAIRS: [(&str, &str); 10] = [
    ("G2", "G1"),
    ("G5", "G2"),
    ("G7", "G3"),
    ("G22", "G4"),
    ("G23", "G5"),
    ("G4", "G6"),
    ("G6", "G7"),
    ("G14", "G8"),
    ("G15", "G9"),
    ("G16", "G10"),
];

/// All display-space generator ids, in the order shown in selection lists.
pub const DISPLAY_GENERATORS: [&str; 10] = [
    "G2", "G5", "G7", "G22", "G23", "G4", "G6", "G14", "G15", "G16",
];

static DISPLAY_TO_BACKEND: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| NAME_PAIRS.iter().copied().collect());

static BACKEND_TO_DISPLAY: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| NAME_PAIRS.iter().map(|&(d, b)| (b, d)).collect());

/// Backend-space name for a display id, if the id is one of the known ten.
pub fn to_backend(display: &str) -> Option<&'static str> {
    DISPLAY_TO_BACKEND.get(display).copied()
}

/// Display-space name for a backend id, if the id is one of the known ten.
pub fn to_display(backend: &str) -> Option<&'static str> {
    BACKEND_TO_DISPLAY.get(backend).copied()
}

/// A generator label in display space.
///
/// Usually one of the ten known ids, but unknown labels stay representable;
/// they simply fail to translate and pass through name rewrites unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneratorId(String);

impl GeneratorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Backend-space name for this id, when it is a known display id.
    pub fn backend_name(&self) -> Option<&'static str> {
        to_backend(&self.0)
    }

    /// Whether this id belongs to the fixed display set.
    pub fn is_known(&self) -> bool {
        DISPLAY_TO_BACKEND.contains_key(self.0.as_str())
    }
}

impl fmt::Display for GeneratorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for GeneratorId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_is_a_bijection() {
        for (display, backend) in NAME_PAIRS {
            assert_eq!(to_backend(display), Some(backend));
            assert_eq!(to_display(backend), Some(display));
            assert_eq!(to_display(to_backend(display).unwrap()), Some(display));
            assert_eq!(to_backend(to_display(backend).unwrap()), Some(backend));
        }
    }

    #[test]
    fn mapping_covers_exactly_ten_ids() {
        assert_eq!(DISPLAY_TO_BACKEND.len(), 10);
        assert_eq!(BACKEND_TO_DISPLAY.len(), 10);
        assert_eq!(DISPLAY_GENERATORS.len(), 10);
    }

    #[test]
    fn unknown_ids_do_not_translate() {
        assert_eq!(to_backend("G99"), None);
        assert_eq!(to_display("G99"), None);
        assert_eq!(to_backend("timestamp"), None);
    }

    #[test]
    fn generator_id_backend_name() {
        assert_eq!(GeneratorId::new("G2").backend_name(), Some("G1"));
        assert_eq!(GeneratorId::new("G99").backend_name(), None);
        assert!(GeneratorId::new("G16").is_known());
        assert!(!GeneratorId::new("G1").is_known());
    }

    #[test]
    fn generator_id_serializes_transparently() {
        let id = GeneratorId::new("G22");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"G22\"");

        let parsed: GeneratorId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
