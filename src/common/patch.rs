//! Serde helper for PATCH bodies that must tell "field omitted" apart from
//! "field explicitly null".

use serde::{Deserialize, Deserializer};

/// Deserializes into `Some(inner)` whenever the field is present, so with
/// `#[serde(default)]` an omitted field stays `None`, a JSON `null` becomes
/// `Some(None)`, and a value becomes `Some(Some(value))`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
