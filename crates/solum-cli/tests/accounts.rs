use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_accounts_lists_builtin_demo_set() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("solum")
        .env("SOLUM_HOME", dir.path())
        .arg("accounts")
        .assert()
        .success()
        .stdout(predicate::str::contains("doctor@solum.com"))
        .stdout(predicate::str::contains("admin@solum.com"))
        .stdout(predicate::str::contains("test@example.com"));
}

#[test]
fn test_accounts_respects_configured_directory() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        r#"
[[accounts]]
email = "nurse@clinic.org"
password = "Rounds42!"
"#,
    )
    .unwrap();

    cargo_bin_cmd!("solum")
        .env("SOLUM_HOME", dir.path())
        .arg("accounts")
        .assert()
        .success()
        .stdout(predicate::str::contains("nurse@clinic.org"))
        .stdout(predicate::str::contains("doctor@solum.com").not());
}

#[test]
fn test_sign_in_refuses_without_a_terminal() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("solum")
        .env("SOLUM_HOME", dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}
