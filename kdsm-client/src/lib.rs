//! Client for the KDSM encryption API.
//!
//! Provides:
//! - An async client ([`KdsmApiClient`]) built on reqwest
//! - A blocking client with the same surface ([`blocking::KdsmApiClient`])
//! - Typed decoding of the `{ success, data, error }` response envelope
//!
//! Encryption itself happens server-side; this crate only moves messages
//! and keys across the wire.

pub mod api_client;
pub mod blocking;
pub mod config;
pub mod error;
pub mod types;

pub use api_client::KdsmApiClient;
pub use config::KdsmConfig;
pub use error::{KdsmError, KdsmResult};
pub use types::*;
