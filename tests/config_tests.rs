use orkpi::config::Config;
use orkpi::config::migrate::{migrate_file, missing_fields};
use orkpi::models::TieBreak;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{Fixture, orkpi};

#[test]
fn test_init_writes_defaults_once() {
    let fx = Fixture::new();

    orkpi()
        .arg("--config")
        .arg(&fx.config)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Config file:"));

    let cfg = Config::load(&fx.config).unwrap();
    assert_eq!(cfg, Config::default());

    orkpi()
        .arg("--config")
        .arg(&fx.config)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("already exists"));
}

#[test]
fn test_missing_config_file_uses_defaults() {
    let fx = Fixture::new();
    assert!(!fx.config.exists());
    assert_eq!(Config::load(&fx.config).unwrap(), Config::default());
}

#[test]
fn test_partial_config_keeps_user_values() {
    let fx = Fixture::new();
    fs::write(&fx.config, "tie_break: first_seen\ncolumns:\n  extraction:\n    key: Numéro\n").unwrap();

    let cfg = Config::load(&fx.config).unwrap();
    assert_eq!(cfg.tie_break, TieBreak::FirstSeen);
    assert_eq!(cfg.columns.extraction.key, "Numéro");
    assert_eq!(cfg.columns.extraction.status, "Planifié ?");
    assert_eq!(cfg.detail_limit, 50);
}

#[test]
fn test_migrate_adds_missing_keys() {
    let fx = Fixture::new();
    fs::write(&fx.config, "tie_break: first_seen\ncolumns:\n  extraction:\n    key: Numéro\n").unwrap();

    let missing = missing_fields(&fx.config).unwrap();
    assert!(missing.contains(&"columns.extraction.status".to_string()));
    assert!(missing.contains(&"columns.timesheet".to_string()));
    assert!(missing.contains(&"field_locations".to_string()));
    assert!(!missing.contains(&"tie_break".to_string()));

    let added = migrate_file(&fx.config).unwrap();
    assert_eq!(added, missing);
    assert!(missing_fields(&fx.config).unwrap().is_empty());

    let cfg = Config::load(&fx.config).unwrap();
    assert_eq!(cfg.tie_break, TieBreak::FirstSeen);
    assert_eq!(cfg.columns.extraction.key, "Numéro");

    // a second run has nothing to do
    assert!(migrate_file(&fx.config).unwrap().is_empty());
}

#[test]
fn test_config_check_and_migrate_cli() {
    let fx = Fixture::new();
    fs::write(&fx.config, "planned_label: Planifié\n").unwrap();

    orkpi()
        .arg("--config")
        .arg(&fx.config)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing fields"))
        .stdout(contains("tie_break"));

    orkpi()
        .arg("--config")
        .arg(&fx.config)
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Configuration migrated"));

    orkpi()
        .arg("--config")
        .arg(&fx.config)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("complete").and(contains("Missing fields").not()));
}

#[test]
fn test_config_drives_the_report() {
    let fx = Fixture::new();
    fs::write(&fx.config, "planned_match: contains\nmissing_label: N/A\n").unwrap();

    fx.cmd("report")
        .assert()
        .success()
        .stdout(contains("100.00 %"))
        .stdout(contains("N/A"));
}

#[test]
fn test_invalid_config_fails() {
    let fx = Fixture::new();
    fs::write(&fx.config, "tie_break: loudest\n").unwrap();

    fx.cmd("report")
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}
