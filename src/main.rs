/*
 * SPDX-FileCopyrightText: 2026 Integrity Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use integrity_core::init_state;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let state = init_state()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&state.cli.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!(
        "Starting Integrity server on {}:{}",
        state.cli.ip,
        state.cli.port
    );

    web::serve_web(Arc::clone(&state)).await?;

    Ok(())
}
