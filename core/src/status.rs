/*
 * SPDX-FileCopyrightText: 2026 Integrity Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::{Duration, NaiveDateTime};

use super::project::{BuildStatus, Project};

/// Human-readable summary of a project's latest build, derived at an
/// explicit reference time so results are reproducible in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    Blank,
    Queued,
    Building { elapsed: Duration },
    Success { duration: Duration },
    Failed { duration: Duration },
}

impl DisplayState {
    pub fn css_class(&self) -> &'static str {
        match self {
            DisplayState::Blank => "blank",
            DisplayState::Queued => "pending",
            DisplayState::Building { .. } => "building",
            DisplayState::Success { .. } => "success",
            DisplayState::Failed { .. } => "failed",
        }
    }

    pub fn status_line(&self) -> String {
        match self {
            DisplayState::Blank => "Never built yet".to_string(),
            DisplayState::Queued => "Build queued".to_string(),
            DisplayState::Building { elapsed } => {
                format!("Building for {}", format_duration(*elapsed))
            }
            DisplayState::Success { duration } => {
                format!("Built successfully in {}", format_duration(*duration))
            }
            DisplayState::Failed { duration } => {
                format!("Built and failed in {}", format_duration(*duration))
            }
        }
    }
}

pub fn describe(project: &Project, now: NaiveDateTime) -> DisplayState {
    let build = match project.last_build() {
        Some(build) => build,
        None => return DisplayState::Blank,
    };

    match build.status {
        BuildStatus::Pending => DisplayState::Queued,
        BuildStatus::Building => {
            // started_at is set on the transition into Building; fall
            // back to creation time if the engine skipped Pending.
            let started_at = build.started_at.unwrap_or(build.created_at);
            DisplayState::Building {
                elapsed: now - started_at,
            }
        }
        BuildStatus::Success => DisplayState::Success {
            duration: build.duration().unwrap_or_else(Duration::zero),
        },
        BuildStatus::Failed => DisplayState::Failed {
            duration: build.duration().unwrap_or_else(Duration::zero),
        },
    }
}

/// Durations under a minute render as seconds; from one minute on they
/// truncate to whole minutes, so 120s and 179s both render as "2m".
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.num_seconds().max(0);

    if secs < 60 {
        format!("{}s", secs)
    } else {
        format!("{}m", secs / 60)
    }
}
