//! Blocking variant of [`crate::api_client::KdsmApiClient`].
//!
//! Same requests and envelope handling; the calling thread waits for the
//! exchange to finish. Must not be used from within an async runtime.

use crate::api_client::API_KEY_HEADER;
use crate::config::KdsmConfig;
use crate::error::KdsmResult;
use crate::types::*;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

#[derive(Clone, Debug)]
pub struct KdsmApiClient {
    client: Client,
    config: KdsmConfig,
}

impl KdsmApiClient {
    pub fn new(config: KdsmConfig) -> Self {
        // reqwest's blocking client defaults to a 30s timeout; the async one has none.
        let client = Client::builder()
            .timeout(None)
            .build()
            .expect("failed to build HTTP client");

        Self { client, config }
    }

    pub fn from_api_key(api_key: impl Into<String>) -> Self {
        Self::new(KdsmConfig::new(api_key))
    }

    pub fn config(&self) -> &KdsmConfig {
        &self.config
    }

    fn post<T: DeserializeOwned>(&self, url: &str, body: &impl Serialize) -> KdsmResult<T> {
        let resp = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(body)
            .send()?;

        let status = resp.status().as_u16();
        debug!("POST {url} -> {status} (blocking)");

        let bytes = resp.bytes()?;
        ApiResponse::<T>::from_body(status, &bytes)?.into_result()
    }

    pub fn encrypt(&self, message: &str, key: Option<&str>) -> KdsmResult<EncryptResult> {
        let req = EncryptRequest::new(message, key);
        self.post(&self.config.encrypt_url(), &req)
    }

    pub fn decrypt(&self, encrypted_message: &str, key: &str) -> KdsmResult<DecryptResult> {
        let req = DecryptRequest {
            encrypted_message,
            key,
        };
        self.post(&self.config.decrypt_url(), &req)
    }
}
