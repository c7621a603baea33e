/*
 * SPDX-FileCopyrightText: 2026 Integrity Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::fmt;

use super::project::Project;

/// Whether a caller may see a project. Public projects are visible to
/// everyone; private ones require authentication. Pure function of its
/// two inputs.
pub fn can_view(project: &Project, caller_is_authenticated: bool) -> bool {
    project.public || caller_is_authenticated
}

/// The two failure kinds of the query layer. The boundary maps them to
/// distinct responses (404 vs 401) and they must never be conflated:
/// an unknown name is `NotFound` even for unauthenticated callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    NotFound,
    Unauthorized,
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessError::NotFound => write!(f, "project not found"),
            AccessError::Unauthorized => write!(f, "authentication required"),
        }
    }
}

impl std::error::Error for AccessError {}
