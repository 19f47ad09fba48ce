//! Record-key translation between display and backend naming.
//!
//! Time-series records are flat maps keyed by `timestamp` plus
//! `{generator}_{property}` columns. The service speaks backend generator
//! names; the session stores display names. Translation rewrites only the
//! generator prefix of each key and leaves everything else alone.

use serde_json::{Map, Value};

use crate::models::generators::{to_backend, to_display};

/// A flat signal record: `timestamp` plus `{generator}_{property}` keys
/// mapped to numeric values.
pub type SignalRecord = Map<String, Value>;

/// Direction of a key rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Display names to backend names.
    ToBackend,
    /// Backend names to display names.
    ToDisplay,
}

/// Rewrite the generator prefix of every key in one record.
///
/// Keys without a `G<digits>` prefix, and keys whose prefix has no entry in
/// the mapping, pass through unchanged. Values are preserved as-is.
pub fn rewrite_record(record: &SignalRecord, direction: Direction) -> SignalRecord {
    let mut rewritten = SignalRecord::new();
    for (key, value) in record {
        rewritten.insert(rewrite_key(key, direction), value.clone());
    }
    rewritten
}

/// Rewrite every record in a sequence, preserving length and order.
pub fn rewrite_records(records: &[SignalRecord], direction: Direction) -> Vec<SignalRecord> {
    records
        .iter()
        .map(|record| rewrite_record(record, direction))
        .collect()
}

fn rewrite_key(key: &str, direction: Direction) -> String {
    let Some(prefix) = generator_prefix(key) else {
        return key.to_string();
    };

    let mapped = match direction {
        Direction::ToBackend => to_backend(prefix),
        Direction::ToDisplay => to_display(prefix),
    };

    match mapped {
        Some(name) => format!("{}{}", name, &key[prefix.len()..]),
        None => key.to_string(),
    }
}

/// Leading `G<digits>` portion of a key, if present.
fn generator_prefix(key: &str) -> Option<&str> {
    let rest = key.strip_prefix('G')?;
    let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    Some(&key[..1 + digits])
}
