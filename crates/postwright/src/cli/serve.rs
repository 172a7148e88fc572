//! Relay server command.

use postwright::{OpenAiClient, PostwrightConfig, PostwrightResult, serve};
use tracing::info;

/// Run the relay on `bind`, or on the configured address.
pub async fn run_serve(bind: Option<String>) -> PostwrightResult<()> {
    let config = PostwrightConfig::load()?;
    let addr = bind.unwrap_or_else(|| config.relay.bind.clone());
    let provider = OpenAiClient::new(config.provider)?;

    info!(address = %addr, model = %provider.config().model(), "Starting relay");
    println!("Relay listening on http://{}/api/generate (Ctrl-C to stop)", addr);
    serve(&addr, provider).await?;
    Ok(())
}
