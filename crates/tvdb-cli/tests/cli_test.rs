#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use assert_cmd::cargo_bin_cmd;
use predicates::prelude::predicate;

#[test]
fn test_help_lists_subcommands() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("tvdb");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("updates"));
}

#[test]
fn test_search_help() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("tvdb");
    cmd.args(["search", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--query"))
        .stdout(predicate::str::contains("--type"));
}

#[test]
fn test_search_missing_query() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("tvdb");
    cmd.arg("search")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--query"));
}

#[test]
fn test_meta_without_extended_is_rejected() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("tvdb");
    cmd.args(["episode", "--id", "349232", "--meta", "translations"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--extended"));
}

#[test]
fn test_missing_api_key_fails() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("tvdb");
    cmd.env_remove("TVDB_API_KEY")
        .args(["--dir", dir.path().to_str().unwrap(), "series", "--id", "81189"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("API key is required"));
}

#[test]
fn test_invalid_since_fails_before_login() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("tvdb");
    cmd.env_remove("TVDB_API_KEY")
        .args(["--dir", dir.path().to_str().unwrap(), "updates", "--since", "yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --since value"));
}

#[test]
fn test_invalid_config_fails() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[api\n").unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("tvdb");
    cmd.args(["--dir", dir.path().to_str().unwrap(), "movie", "--id", "106"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"));
}

#[test]
fn test_config_dir_from_environment() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[api\n").unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("tvdb");
    cmd.env("TVDB_CONFIG_DIR", dir.path())
        .args(["movie", "--id", "106"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"));
}

#[test]
fn test_unreachable_server_reports_login_failure() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[api]\napi_key = \"key\"\nbase_url = \"http://127.0.0.1:9/v4/\"\ntimeout_secs = 5\n",
    )
    .unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("tvdb");
    cmd.env_remove("TVDB_API_KEY")
        .args(["--dir", dir.path().to_str().unwrap(), "person", "--id", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to log in to TVDB"));
}
