use axum::{routing::get, Router};
use perennial_core::SrsConfig;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::api::routes::{simulate_get, simulate_post, AppState};

pub fn router(defaults: SrsConfig) -> Router {
    let state = Arc::new(AppState { defaults });

    Router::new()
        .route("/simulate", get(simulate_get).post(simulate_post))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(defaults: SrsConfig, addr: SocketAddr) -> anyhow::Result<()> {
    let app = router(defaults);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "preview API listening");
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
