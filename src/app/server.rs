use crate::app::router::build_router;
use crate::app::state::AppState;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use tokio::net::TcpListener;

pub async fn serve<C: ConfigProvider>(config: &C) -> Result<()> {
    let state = AppState::from_config(config)?;

    let addr = format!("{}:{}", config.host(), config.port());
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Listening on http://{}", listener.local_addr()?);
    tracing::info!(
        "Requesting up to {} courses per skill",
        state.aggregator.result_limit()
    );
    if let Some(timeout) = config.request_timeout() {
        tracing::info!("Catalog request timeout: {:?}", timeout);
    }

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
