//! Relay server lifecycle.

use crate::{RelayState, create_router};
use postwright_error::{ServerError, ServerErrorKind};
use postwright_interface::CompletionProvider;
use std::future::Future;
use tokio::net::TcpListener;
use tracing::info;

/// Bind `addr` and serve the relay until Ctrl-C.
///
/// # Errors
///
/// Returns [`ServerErrorKind::Bind`] if the address cannot be bound and
/// [`ServerErrorKind::Serve`] if the server stops abnormally.
#[tracing::instrument(skip(provider), fields(provider = provider.provider_name()))]
pub async fn serve<P>(addr: &str, provider: P) -> Result<(), ServerError>
where
    P: CompletionProvider + 'static,
{
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        ServerError::new(ServerErrorKind::Bind {
            address: addr.to_string(),
            message: e.to_string(),
        })
    })?;

    serve_with_listener(listener, provider, async {
        // Falls through on signal registration failure, stopping the server
        let _ = tokio::signal::ctrl_c().await;
        info!("Received Ctrl-C, shutting down relay");
    })
    .await
}

/// Serve the relay on an already-bound listener until `shutdown` resolves.
///
/// # Errors
///
/// Returns [`ServerErrorKind::Serve`] if the server stops abnormally.
pub async fn serve_with_listener<P, F>(
    listener: TcpListener,
    provider: P,
    shutdown: F,
) -> Result<(), ServerError>
where
    P: CompletionProvider + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener
        .local_addr()
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;
    info!(address = %local_addr, "Relay listening");

    axum::serve(listener, create_router(RelayState::new(provider)))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;

    info!("Relay stopped");
    Ok(())
}
