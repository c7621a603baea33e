/*
 * SPDX-FileCopyrightText: 2026 Integrity Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */


use axum_test::TestServer;
use base64::{engine::general_purpose, Engine};
use integrity_core::project::Project;
use integrity_core::registry::ProjectRegistry;
use integrity_core::types::{Cli, ServerState};
use std::sync::Arc;

pub fn test_state(projects: Vec<Project>) -> Arc<ServerState> {
    let cli = Cli {
        log_level: "info".to_string(),
        ip: "127.0.0.1".to_string(),
        port: 3000,
        admin_user: "admin".to_string(),
        admin_password: Some("test".to_string()),
        admin_password_file: None,
        projects_file: None,
    };

    let registry = ProjectRegistry::new();
    registry.seed(projects).unwrap();

    Arc::new(ServerState {
        registry,
        admin_password: "test".to_string(),
        cli,
    })
}

pub fn test_server(projects: Vec<Project>) -> TestServer {
    TestServer::new(web::build_router(test_state(projects))).unwrap()
}

pub fn basic_header(user: &str, password: &str) -> String {
    format!(
        "Basic {}",
        general_purpose::STANDARD.encode(format!("{}:{}", user, password))
    )
}
