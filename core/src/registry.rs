/*
 * SPDX-FileCopyrightText: 2026 Integrity Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::sync::RwLock;

use super::access::{can_view, AccessError};
use super::input::check_index_name;
use super::project::Project;

/// In-memory project store. Reads clone a snapshot under the read
/// lock, so lookups stay consistent while the execution engine swaps
/// in updated build state.
#[derive(Debug, Default)]
pub struct ProjectRegistry {
    projects: RwLock<Vec<Project>>,
}

impl ProjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, project: Project) -> Result<(), String> {
        check_index_name(&project.name)?;

        let mut projects = self.projects.write().expect("registry lock poisoned");
        if projects.iter().any(|p| p.name == project.name) {
            return Err(format!("project `{}` already exists", project.name));
        }

        projects.push(project);
        Ok(())
    }

    pub fn seed(&self, projects: Vec<Project>) -> Result<(), String> {
        for project in projects {
            self.add(project)?;
        }

        Ok(())
    }

    /// Case-sensitive exact match on the slug name.
    pub fn find_by_name(&self, name: &str) -> Option<Project> {
        self.projects
            .read()
            .expect("registry lock poisoned")
            .iter()
            .find(|p| p.name == name)
            .cloned()
    }

    /// Projects visible to the caller, in insertion order.
    pub fn list(&self, authenticated: bool) -> Vec<Project> {
        self.projects
            .read()
            .expect("registry lock poisoned")
            .iter()
            .filter(|p| can_view(p, authenticated))
            .cloned()
            .collect()
    }

    /// Lookup plus access check. An unknown name is always `NotFound`;
    /// a known private name without credentials is `Unauthorized`.
    pub fn view(&self, name: &str, authenticated: bool) -> Result<Project, AccessError> {
        let project = self.find_by_name(name).ok_or(AccessError::NotFound)?;

        if can_view(&project, authenticated) {
            Ok(project)
        } else {
            Err(AccessError::Unauthorized)
        }
    }

    /// Replaces a project's stored state, keyed by slug name. Used by
    /// the execution engine to publish build transitions.
    pub fn update(&self, project: Project) -> Result<(), AccessError> {
        let mut projects = self.projects.write().expect("registry lock poisoned");
        let slot = projects
            .iter_mut()
            .find(|p| p.name == project.name)
            .ok_or(AccessError::NotFound)?;

        *slot = project;
        Ok(())
    }
}
