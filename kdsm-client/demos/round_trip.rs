//! Encrypts a message and decrypts it again against a running KDSM server.
//!
//! ```sh
//! KDSM_API_KEY=kdsm_... KDSM_BASE_URL=http://localhost:3000/api/v1 \
//!     cargo run -p kdsm-client --example round_trip
//! ```

use kdsm_client::{KdsmApiClient, KdsmConfig, KdsmResult};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let api_key = std::env::var("KDSM_API_KEY").unwrap_or_default();
    let config = match std::env::var("KDSM_BASE_URL") {
        Ok(base) => KdsmConfig::with_base_url(api_key, base),
        Err(_) => KdsmConfig::new(api_key),
    };
    info!("using {}", config.api_base_url);

    if let Err(e) = run(&KdsmApiClient::new(config)).await {
        error!("round trip failed: {e}");
        std::process::exit(1);
    }
}

async fn run(client: &KdsmApiClient) -> KdsmResult<()> {
    let encrypted = client.encrypt("786", Some("110")).await?;
    info!("encrypted: {}", encrypted.encrypted_message);
    info!("key: {}", encrypted.key);

    let decrypted = client
        .decrypt(&encrypted.encrypted_message, &encrypted.key)
        .await?;
    info!("decrypted: {}", decrypted.decrypted_message);
    Ok(())
}
