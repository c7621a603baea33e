/*
 * SPDX-FileCopyrightText: 2026 Integrity Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod auth;
mod endpoint;
pub mod error;
mod pages;

use axum::routing::get;
use axum::Router;
use integrity_core::types::ServerState;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/", get(endpoint::get_home))
        .route("/login", get(endpoint::get_login))
        .route("/{name}", get(endpoint::get_project))
        .fallback(endpoint::handle_404)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    axum::serve(listener, app).await
}
