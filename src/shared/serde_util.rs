//! Custom serde helpers for the upstream wire format.

/// Deserializes `null` as `T::default()`.
///
/// The upstream sends `null` for supply figures it does not know. Combined with
/// `#[serde(default)]` on the container, missing and `null` fields both decode
/// to the default value, while values of the wrong type still fail.
pub mod null_as_default {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}
