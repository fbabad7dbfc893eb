//! Network URL constants for the CoinLore client.

/// Default REST API base URL for CoinLore.
pub const DEFAULT_API_URL: &str = "https://api.coinlore.net";
