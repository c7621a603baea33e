/*
 * SPDX-FileCopyrightText: 2026 Integrity Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::input::to_index_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildStatus {
    Pending,
    Building,
    Success,
    Failed,
}

impl BuildStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, BuildStatus::Success | BuildStatus::Failed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    AlreadyStarted,
    NotStarted,
    AlreadyCompleted,
    CompletedBeforeStarted,
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionError::AlreadyStarted => write!(f, "build has already been started"),
            TransitionError::NotStarted => write!(f, "build has not been started"),
            TransitionError::AlreadyCompleted => write!(f, "build has already completed"),
            TransitionError::CompletedBeforeStarted => {
                write!(f, "build cannot complete before it started")
            }
        }
    }
}

impl std::error::Error for TransitionError {}

/// A single execution record of a project. Created by the execution
/// engine, which owns all state transitions; terminal builds are
/// immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
    pub id: Uuid,
    pub status: BuildStatus,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub started_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub completed_at: Option<NaiveDateTime>,
}

impl Build {
    pub fn new(created_at: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            status: BuildStatus::Pending,
            created_at,
            started_at: None,
            completed_at: None,
        }
    }

    pub fn start(&mut self, at: NaiveDateTime) -> Result<(), TransitionError> {
        if self.status != BuildStatus::Pending {
            return Err(TransitionError::AlreadyStarted);
        }

        self.status = BuildStatus::Building;
        self.started_at = Some(at);
        Ok(())
    }

    pub fn succeed(&mut self, at: NaiveDateTime) -> Result<(), TransitionError> {
        self.complete(BuildStatus::Success, at)
    }

    pub fn fail(&mut self, at: NaiveDateTime) -> Result<(), TransitionError> {
        self.complete(BuildStatus::Failed, at)
    }

    fn complete(&mut self, status: BuildStatus, at: NaiveDateTime) -> Result<(), TransitionError> {
        match self.status {
            BuildStatus::Pending => return Err(TransitionError::NotStarted),
            BuildStatus::Building => {}
            _ => return Err(TransitionError::AlreadyCompleted),
        }

        // Invariant: completed_at >= started_at
        let started_at = self.started_at.ok_or(TransitionError::NotStarted)?;
        if at < started_at {
            return Err(TransitionError::CompletedBeforeStarted);
        }

        self.status = status;
        self.completed_at = Some(at);
        Ok(())
    }

    /// Total wall time of a finished build; `None` while it is still
    /// pending or running.
    pub fn duration(&self) -> Option<Duration> {
        match (self.started_at, self.completed_at) {
            (Some(started), Some(completed)) => Some(completed - started),
            _ => None,
        }
    }
}

/// A named, visibility-scoped unit being monitored. Owns its builds;
/// insertion order is chronological, so the last element is the most
/// recent build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub builds: Vec<Build>,
}

impl Project {
    pub fn new(display_name: &str, public: bool) -> Self {
        Self {
            name: to_index_name(display_name),
            display_name: display_name.to_string(),
            public,
            builds: Vec::new(),
        }
    }

    pub fn last_build(&self) -> Option<&Build> {
        self.builds.last()
    }

    pub fn add_build(&mut self, build: Build) {
        self.builds.push(build);
    }
}
