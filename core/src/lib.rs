/*
 * SPDX-FileCopyrightText: 2026 Integrity Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod access;
pub mod consts;
pub mod input;
pub mod project;
pub mod registry;
pub mod status;
pub mod types;

use anyhow::Context;
use clap::Parser;
use input::load_secret;
use project::Project;
use registry::ProjectRegistry;
use std::sync::Arc;
use types::*;

pub fn init_state() -> anyhow::Result<Arc<ServerState>> {
    let cli = Cli::parse();

    let admin_password = resolve_admin_password(&cli);
    let registry = ProjectRegistry::new();

    if let Some(path) = cli.projects_file.clone() {
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read projects file {}", path))?;
        let projects: Vec<Project> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse projects file {}", path))?;
        registry
            .seed(projects)
            .map_err(|e| anyhow::anyhow!("Failed to seed projects from {}: {}", path, e))?;
    }

    Ok(Arc::new(ServerState {
        registry,
        admin_password,
        cli,
    }))
}

fn resolve_admin_password(cli: &Cli) -> String {
    if let Some(file) = &cli.admin_password_file {
        return load_secret(file);
    }

    cli.admin_password
        .clone()
        .unwrap_or_else(|| consts::DEFAULT_ADMIN_PASSWORD.to_string())
}
