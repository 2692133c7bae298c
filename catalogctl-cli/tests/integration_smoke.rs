//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command pointed at a config file that does not exist, so defaults apply.
fn catalogctl(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("catalogctl").unwrap();
    cmd.env("CATALOGCTL_CONFIG", dir.path().join("config.toml"))
        .env_remove("CATALOGCTL_BIND")
        .env_remove("RUST_LOG");
    cmd
}

// === Help Tests ===

#[test]
fn test_serve_help() {
    let dir = TempDir::new().unwrap();
    catalogctl(&dir)
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--no-seed"));
}

#[test]
fn test_search_help() {
    let dir = TempDir::new().unwrap();
    catalogctl(&dir)
        .arg("search")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--cuisine"));
}

// === Query Tests ===

#[test]
fn test_list_json_prints_sample_catalogue() {
    let dir = TempDir::new().unwrap();
    let output = catalogctl(&dir).arg("list").arg("--json").output().unwrap();
    assert!(output.status.success());

    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records.as_array().unwrap().len(), 12);
    assert_eq!(records[0]["name"], "El Pescador Manabita");
}

#[test]
fn test_top_limit() {
    let dir = TempDir::new().unwrap();
    catalogctl(&dir)
        .args(["top", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("La Parrilla del Mar"))
        .stdout(predicate::str::contains("Sushi Zen").not());
}

#[test]
fn test_search_requires_filter() {
    let dir = TempDir::new().unwrap();
    catalogctl(&dir)
        .arg("search")
        .assert()
        .failure()
        .stderr(predicate::str::contains("search filter cannot be empty"));

    catalogctl(&dir)
        .args(["search", "--cuisine", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("search filter cannot be empty"));

    catalogctl(&dir)
        .args(["search", "--sector", "esteros"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pizzería Sole Mio"))
        .stdout(predicate::str::contains("Vegetariano Vida Sana"));
}

#[test]
fn test_search_rejects_inverted_price_band() {
    let dir = TempDir::new().unwrap();
    catalogctl(&dir)
        .args(["search", "--min-price", "40", "--max-price", "20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("min_price: must not exceed max_price"));

    // a blank cuisine is ignored when a price bound is present
    let output = catalogctl(&dir)
        .args(["search", "--cuisine", "", "--min-price", "25", "--max-price", "35", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records.as_array().unwrap().len(), 3);
}

#[test]
fn test_stats_summary() {
    let dir = TempDir::new().unwrap();
    catalogctl(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Restaurants:    12"));
}

// === Config Tests ===

#[test]
fn test_config_path_honours_env() {
    let dir = TempDir::new().unwrap();
    catalogctl(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_show_reads_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[store]\nlatency_ms = 250\nseed = false\n",
    )
    .unwrap();

    catalogctl(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("latency_ms = 250"))
        .stdout(predicate::str::contains("seed = false"));

    // no seed means an empty catalogue
    catalogctl(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No restaurants found"));
}
