/*
 * SPDX-FileCopyrightText: 2026 Integrity Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for input validation helpers

use integrity_core::input::*;

#[test]
fn test_port_in_range() {
    assert_eq!(port_in_range("3000"), Ok(3000));
    assert_eq!(port_in_range("1"), Ok(1));
    assert_eq!(port_in_range("65535"), Ok(65535));

    assert!(port_in_range("0").is_err());
    assert!(port_in_range("65536").is_err());
    assert!(port_in_range("not-a-port").is_err());
}

#[test]
fn test_check_index_name_accepts_slugs() {
    assert!(check_index_name("integrity").is_ok());
    assert!(check_index_name("my-test-project").is_ok());
    assert!(check_index_name("project-2").is_ok());
}

#[test]
fn test_check_index_name_rejects_invalid() {
    assert!(check_index_name("").is_err());
    assert!(check_index_name("Integrity").is_err());
    assert!(check_index_name("my project").is_err());
    assert!(check_index_name("-integrity").is_err());
    assert!(check_index_name("integrity-").is_err());
    assert!(check_index_name("inte/grity").is_err());
}

#[test]
fn test_to_index_name() {
    assert_eq!(to_index_name("Integrity"), "integrity");
    assert_eq!(to_index_name("My Test Project"), "my-test-project");
    assert_eq!(to_index_name("Secret"), "secret");
    assert_eq!(to_index_name("  spaced   out  "), "spaced-out");
    assert_eq!(to_index_name("C.I. Server!"), "ci-server");
}

#[test]
fn test_slugified_names_pass_validation() {
    for display in ["Integrity", "My Test Project", "Secret", "Build 2"] {
        let slug = to_index_name(display);
        assert!(check_index_name(&slug).is_ok(), "bad slug: {}", slug);
    }
}
