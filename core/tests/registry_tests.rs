/*
 * SPDX-FileCopyrightText: 2026 Integrity Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for the project registry and access policy

use integrity_core::access::{can_view, AccessError};
use integrity_core::project::Project;
use integrity_core::registry::ProjectRegistry;

fn registry_with(projects: Vec<Project>) -> ProjectRegistry {
    let registry = ProjectRegistry::new();
    registry.seed(projects).unwrap();
    registry
}

#[test]
fn test_public_projects_visible_to_everyone() {
    let project = Project::new("Integrity", true);

    assert!(can_view(&project, false));
    assert!(can_view(&project, true));
}

#[test]
fn test_private_projects_require_authentication() {
    let project = Project::new("Secret", false);

    assert!(!can_view(&project, false));
    assert!(can_view(&project, true));
}

#[test]
fn test_find_by_name_exact_match() {
    let registry = registry_with(vec![Project::new("Secret", false)]);

    assert!(registry.find_by_name("secret").is_some());
    assert!(registry.find_by_name("foobiz").is_none());
    assert!(registry.find_by_name("Secret").is_none());
    assert!(registry.find_by_name("").is_none());
}

#[test]
fn test_view_unknown_project_is_not_found() {
    let registry = registry_with(vec![Project::new("Secret", false)]);

    // Unknown names are NotFound even for anonymous callers.
    assert_eq!(registry.view("foobiz", false), Err(AccessError::NotFound));
    assert_eq!(registry.view("foobiz", true), Err(AccessError::NotFound));
}

#[test]
fn test_view_private_project_requires_authentication() {
    let registry = registry_with(vec![Project::new("Secret", false)]);

    assert_eq!(
        registry.view("secret", false),
        Err(AccessError::Unauthorized)
    );
    assert_eq!(registry.view("secret", true).unwrap().name, "secret");
}

#[test]
fn test_list_filters_private_projects() {
    let registry = registry_with(vec![
        Project::new("My Test Project", false),
        Project::new("Integrity", true),
    ]);

    let anonymous: Vec<String> = registry
        .list(false)
        .into_iter()
        .map(|p| p.display_name)
        .collect();
    assert_eq!(anonymous, vec!["Integrity"]);

    let authenticated: Vec<String> = registry
        .list(true)
        .into_iter()
        .map(|p| p.display_name)
        .collect();
    assert_eq!(authenticated, vec!["My Test Project", "Integrity"]);
}

#[test]
fn test_add_rejects_duplicate_names() {
    let registry = registry_with(vec![Project::new("Integrity", true)]);

    let err = registry.add(Project::new("Integrity", false)).unwrap_err();
    assert!(err.contains("already exists"));
}

#[test]
fn test_add_rejects_invalid_slug() {
    let registry = ProjectRegistry::new();

    let mut project = Project::new("Integrity", true);
    project.name = "Not A Slug".to_string();

    assert!(registry.add(project).is_err());
}

#[test]
fn test_update_replaces_project_state() {
    let registry = registry_with(vec![Project::new("Integrity", true)]);

    let mut updated = registry.find_by_name("integrity").unwrap();
    updated.public = false;
    registry.update(updated).unwrap();

    assert!(!registry.find_by_name("integrity").unwrap().public);
    assert_eq!(
        registry.update(Project::new("Unknown", true)),
        Err(AccessError::NotFound)
    );
}

#[test]
fn test_seed_from_json() {
    let raw = r#"[
        {"name": "integrity", "display_name": "Integrity", "public": true},
        {"name": "my-test-project", "display_name": "My Test Project"}
    ]"#;

    let projects: Vec<Project> = serde_json::from_str(raw).unwrap();
    let registry = registry_with(projects);

    assert!(registry.find_by_name("integrity").unwrap().public);

    // Visibility defaults to private when the seed file omits it.
    let private = registry.find_by_name("my-test-project").unwrap();
    assert!(!private.public);
    assert!(private.builds.is_empty());
}
