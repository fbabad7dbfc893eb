//! API response types for the CoinLore REST API.

pub mod coin;
pub mod global;

// Re-export all types for convenience
pub use coin::*;
pub use global::*;
