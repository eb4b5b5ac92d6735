/*
 * Responsibility
 * - Config読み込み → tracing 初期化 → Router 組み立て
 * - Middleware の適用 (TraceLayer)
 * - axum::serve() で起動
 */
use anyhow::Result;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::{api, config::Config, state::AppState};

pub async fn run() -> Result<()> {
    let config = Config::from_env()?;
    init_tracing();

    let state = AppState::new();
    let app = build_router(&config, state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!("server running at http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn build_router(config: &Config, state: AppState) -> Router {
    Router::new()
        .merge(api::routes(&config.auth_done_path))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
