use std::future::IntoFuture;
use std::sync::Arc;

use imgbot_webhook::app_state::AppState;
use imgbot_webhook::collaborators::{ChannelQueue, MemoryTable};
use imgbot_webhook::config::HookConfig;
use imgbot_webhook::handlers;
use imgbot_webhook::Result;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = HookConfig::load()?;

    let (queue, actor) = ChannelQueue::bounded(config.queue_capacity);
    let table = Arc::new(MemoryTable::new());
    let app_state = Arc::new(AppState::new(&config, Arc::new(queue), table));

    let app = handlers::router(app_state);

    let shutdown = CancellationToken::new();
    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Could not listen for shutdown signal: {e}");
                return;
            }
            tracing::info!("Shutting down");
            shutdown.cancel();
        }
    });

    let listener = TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("Listening on {}", config.listen_addr);

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .into_future();

    // The router owns the last queue handle, so the actor finishes draining
    // once the server has stopped.
    let (served, drained) = futures::future::join(server, actor.run()).await;
    served?;

    tracing::info!("Router queue drained {drained} messages");

    Ok(())
}
