use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::{self, AppState};
use crate::config::ServerConfig;

/// Full application: the JSON API under `/api`
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api::router(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Bind the configured `host:port`.
pub async fn bind(server: &ServerConfig) -> Result<TcpListener> {
    let addr = format!("{}:{}", server.host, server.port);
    TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))
}

pub async fn run(server: &ServerConfig, state: AppState) -> Result<()> {
    let listener = bind(server).await?;
    let addr = listener.local_addr().context("Listener has no local address")?;
    tracing::info!("Web server running at http://{}", addr);
    axum::serve(listener, app(state))
        .await
        .context("Web server stopped")?;
    Ok(())
}
