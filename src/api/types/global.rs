//! Global market aggregate types for the CoinLore REST API.

use serde::{Deserialize, Serialize};

use crate::shared::serde_util::null_as_default;

/// Market-wide aggregates from `GET api/global/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Global {
    /// Number of coins tracked
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub coins_count: i64,
    /// Bitcoin dominance percentage
    #[serde(rename = "btc_d", deserialize_with = "null_as_default::deserialize")]
    pub btc_dominance: String,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub mcap_change: String,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub volume_change: String,
}
