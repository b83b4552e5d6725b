//! Integration tests for MENUTREE_* environment overrides.
//!
//! Environment variables are process-global, so every test here is serial
//! and clears the variables it set.

use std::env;
use std::fs;

use serial_test::serial;
use tempfile::TempDir;

use menutree::application::ApplicationError;
use menutree::config::Settings;
use menutree::domain::{ChildOrder, OrphanPolicy};

const VARS: [&str; 3] = [
    "MENUTREE_ORPHAN_POLICY",
    "MENUTREE_CHILD_ORDER",
    "MENUTREE_PATH_DELIMITER",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn given_env_vars_when_load_then_override_files() {
    // Arrange
    clear_env();
    let dir = TempDir::new().unwrap();
    let local = dir.path().join("local.toml");
    fs::write(
        &local,
        "orphan_policy = \"drop\"\nchild_order = \"input\"\npath_delimiter = \".\"\n",
    )
    .unwrap();
    env::set_var("MENUTREE_ORPHAN_POLICY", "promote");
    env::set_var("MENUTREE_CHILD_ORDER", "sequence");

    // Act
    let result = Settings::load_from(None, Some(&local));
    clear_env();

    // Assert
    let settings = result.expect("load settings");
    assert_eq!(settings.orphan_policy, OrphanPolicy::Promote);
    assert_eq!(settings.child_order, ChildOrder::Sequence);
    assert_eq!(settings.path_delimiter, '.');
}

#[test]
#[serial]
fn given_env_delimiter_when_load_then_replaces_default() {
    clear_env();
    env::set_var("MENUTREE_PATH_DELIMITER", ":");

    let result = Settings::load_from(None, None);
    clear_env();

    assert_eq!(result.expect("load settings").path_delimiter, ':');
}

#[test]
#[serial]
fn given_invalid_env_policy_when_load_then_domain_error() {
    clear_env();
    env::set_var("MENUTREE_ORPHAN_POLICY", "keep");

    let result = Settings::load_from(None, None);
    clear_env();

    assert!(matches!(result, Err(ApplicationError::Domain(_))));
}

#[test]
#[serial]
fn given_multichar_env_delimiter_when_load_then_config_error() {
    clear_env();
    env::set_var("MENUTREE_PATH_DELIMITER", "::");

    let result = Settings::load_from(None, None);
    clear_env();

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}
