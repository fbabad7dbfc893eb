//! Shared utilities for decoding upstream payloads.

pub mod serde_util;
