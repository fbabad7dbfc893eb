//! REST API client module for CoinLore.
//!
//! This module provides a typed HTTP client for the three read endpoints of
//! the CoinLore API: the paginated coin list, a single coin ticker, and global
//! market aggregates.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use coinlore::api::CoinloreClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinloreClient::new("https://api.coinlore.net")?;
//!
//!     let global = client.get_global().await?;
//!     println!("Tracking {} coins", global.coins_count);
//!
//!     let coins = client.get_coins(0, 5).await?;
//!     for coin in &coins {
//!         println!("#{} {} {}", coin.rank, coin.symbol, coin.price_usd);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Client Configuration
//!
//! Use the builder pattern for custom configuration:
//!
//! ```rust,ignore
//! use coinlore::api::CoinloreClient;
//! use std::time::Duration;
//!
//! let client = CoinloreClient::builder("https://api.coinlore.net")
//!     .timeout(Duration::from_secs(5))
//!     .header("User-Agent", "my-app/1.0")
//!     .build()?;
//! ```
//!
//! # Error Handling
//!
//! All methods return `ClientResult<T>`, an alias for `Result<T, ClientError>`.
//! Every [`ClientError`] carries an HTTP-style status:
//!
//! ```rust,ignore
//! use coinlore::api::{CoinloreClient, ClientError};
//!
//! match client.get_coin(905454).await {
//!     Ok(coin) => println!("Found {}", coin.name),
//!     Err(ClientError::NotFound { id }) => println!("No coin {}", id),
//!     Err(e) if e.is_server_error() => println!("Upstream trouble ({}): {}", e.status(), e),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

pub mod client;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use client::{CoinloreClient, CoinloreClientBuilder, Endpoint, Envelope, DEFAULT_TIMEOUT_SECS};
pub use error::{ClientError, ClientResult};
pub use types::*;
