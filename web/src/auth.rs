/*
 * SPDX-FileCopyrightText: 2026 Integrity Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use base64::{engine::general_purpose, Engine};
use integrity_core::types::ServerState;

/// Checks HTTP Basic credentials against the configured admin account.
/// Missing or malformed headers count as unauthenticated; they never
/// fail the request by themselves, since every page has an anonymous
/// rendition.
pub fn is_authenticated(state: &ServerState, headers: &HeaderMap) -> bool {
    let header = match headers.get(AUTHORIZATION).map(|h| h.to_str()) {
        Some(Ok(header)) => header,
        _ => return false,
    };

    match parse_basic(header) {
        Some((user, password)) => user == state.cli.admin_user && password == state.admin_password,
        None => false,
    }
}

fn parse_basic(header: &str) -> Option<(String, String)> {
    let encoded = header.strip_prefix("Basic ")?;
    let decoded = general_purpose::STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (user, password) = decoded.split_once(':')?;

    Some((user.to_string(), password.to_string()))
}
