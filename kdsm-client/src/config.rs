//! Client configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Base URL used when none is supplied (local development server).
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api/v1";

/// Base URL of the hosted KDSM API.
pub const HOSTED_BASE_URL: &str = "https://kdsm.vercel.app/api/v1";

/// Configuration for the KDSM API client.
///
/// Fixed once a client is built from it; clients never mutate their config.
#[derive(Clone, Serialize, Deserialize)]
pub struct KdsmConfig {
    /// API key sent in the `x-api-key` header (e.g. "kdsm_3eb7...").
    /// Passed through as-is, never validated.
    pub api_key: String,

    /// Base URL for the versioned API (e.g., "http://localhost:3000/api/v1").
    #[serde(default = "default_base_url")]
    pub api_base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl KdsmConfig {
    /// Config targeting [`DEFAULT_BASE_URL`].
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, api_base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base_url: api_base_url.into(),
        }
    }

    /// Config targeting the hosted service at [`HOSTED_BASE_URL`].
    pub fn hosted(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, HOSTED_BASE_URL)
    }

    pub fn encrypt_url(&self) -> String {
        format!("{}/encrypt", self.api_base_url)
    }

    pub fn decrypt_url(&self) -> String {
        format!("{}/decrypt", self.api_base_url)
    }
}

impl fmt::Debug for KdsmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KdsmConfig")
            .field("api_key", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}
