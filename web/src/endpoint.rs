/*
 * SPDX-FileCopyrightText: 2026 Integrity Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::{Html, Redirect};
use chrono::Utc;
use integrity_core::project::Project;
use integrity_core::status::{self, DisplayState};
use integrity_core::types::ServerState;
use std::sync::Arc;

use crate::auth::is_authenticated;
use crate::error::{WebError, WebResult};
use crate::pages;

pub async fn get_home(
    state: State<Arc<ServerState>>,
    headers: HeaderMap,
) -> Html<String> {
    let authenticated = is_authenticated(&state, &headers);
    let now = Utc::now().naive_utc();

    let projects: Vec<(Project, DisplayState)> = state
        .registry
        .list(authenticated)
        .into_iter()
        .map(|project| {
            let display = status::describe(&project, now);
            (project, display)
        })
        .collect();

    Html(pages::home(&projects, authenticated))
}

pub async fn get_login(
    state: State<Arc<ServerState>>,
    headers: HeaderMap,
) -> WebResult<Redirect> {
    if is_authenticated(&state, &headers) {
        Ok(Redirect::to("/"))
    } else {
        // Challenge the browser; the 401 page carries the retry links.
        Err(WebError::Unauthorized)
    }
}

pub async fn get_project(
    state: State<Arc<ServerState>>,
    Path(name): Path<String>,
    headers: HeaderMap,
) -> WebResult<Html<String>> {
    let authenticated = is_authenticated(&state, &headers);
    let project = state.registry.view(&name, authenticated)?;

    let now = Utc::now().naive_utc();
    let display = status::describe(&project, now);

    Ok(Html(pages::project_detail(&project, &display)))
}

pub async fn handle_404() -> WebError {
    WebError::NotFound
}
