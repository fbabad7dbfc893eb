//! # CoinLore Rust SDK
//!
//! An async client for the CoinLore cryptocurrency market-data API.
//!
//! The crate never prints or installs a logger; it only emits `tracing` events,
//! which are dropped unless the caller installs a subscriber.
//!
//! ## Modules
//!
//! - [`api`]: REST client for coin tickers and global market data
//! - [`network`]: Default endpoint URL
//! - [`shared`]: Serde helpers for the upstream wire format
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coinlore::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinloreClient::new(DEFAULT_API_URL)?;
//!
//!     let global = client.get_global().await?;
//!     println!("Global coins count: {}", global.coins_count);
//!
//!     let coin = client.get_coin(90).await?;
//!     println!("Coin: {}, Price: {} USD", coin.name, coin.price_usd);
//!
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// REST API client module for coins and global market data.
pub mod api;

/// Network URL constants.
pub mod network;

/// Shared serde helpers.
pub mod shared;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use coinlore::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        ClientError, ClientResult, Coin, CoinListResponse, CoinloreClient, CoinloreClientBuilder,
        Global,
    };

    pub use crate::network::DEFAULT_API_URL;
}
