use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get path to fixture file
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Command isolated from the user's config file
fn ketik(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!();
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn test_cli_help_flag() {
    cargo_bin_cmd!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Suggest completions"));
}

#[test]
fn test_cli_version_flag() {
    cargo_bin_cmd!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ketik"));
}

#[test]
fn test_fixture_files_exist() {
    assert!(fixture_path("names.txt").exists());
}

#[test]
fn test_cli_with_nonexistent_pool() {
    let home = TempDir::new().unwrap();
    ketik(&home)
        .args(["--pool", "nonexistent.txt", "bud"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Candidate pool not found"));
}

#[test]
fn test_cli_prints_ranked_suggestions() {
    let home = TempDir::new().unwrap();
    ketik(&home)
        .arg("--pool")
        .arg(fixture_path("names.txt"))
        .arg("bud")
        .assert()
        .success()
        .stdout("Budi\nBudi Santoso\nBudi Setiawan\n");
}

#[test]
fn test_cli_uses_typed_context() {
    let home = TempDir::new().unwrap();
    ketik(&home)
        .arg("--pool")
        .arg(fixture_path("names.txt"))
        .arg("Budi S")
        .assert()
        .success()
        // "Siti ..." are floating matches on their first token
        .stdout("Santoso\nSetiawan\nSiti Aminah\nSiti Rahayu\n");
}

#[test]
fn test_cli_caret_inside_text() {
    let home = TempDir::new().unwrap();
    ketik(&home)
        .arg("--pool")
        .arg(fixture_path("names.txt"))
        .args(["--caret", "3", "Siti"])
        .assert()
        .success()
        .stdout("Siti Aminah\nSiti Rahayu\n");
}

#[test]
fn test_cli_max_results_flag() {
    let home = TempDir::new().unwrap();
    ketik(&home)
        .arg("--pool")
        .arg(fixture_path("names.txt"))
        .args(["--max-results", "1", "bud"])
        .assert()
        .success()
        .stdout("Budi\n");
}

#[test]
fn test_cli_json_output() {
    let home = TempDir::new().unwrap();
    ketik(&home)
        .arg("--pool")
        .arg(fixture_path("names.txt"))
        .args(["--json", "Budi S"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""key":"budi|s""#))
        .stdout(predicate::str::contains(r#""suggestions":["Santoso","Setiawan","Siti Aminah","Siti Rahayu"]"#));
}

#[test]
fn test_cli_no_token_prints_nothing() {
    let home = TempDir::new().unwrap();
    ketik(&home)
        .arg("--pool")
        .arg(fixture_path("names.txt"))
        .arg("Budi ")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_cli_commit_prints_resulting_text() {
    let home = TempDir::new().unwrap();
    ketik(&home)
        .arg("--pool")
        .arg(fixture_path("names.txt"))
        .args(["--commit", "Santoso", "Budi Sant"])
        .assert()
        .success()
        .stdout("Budi Santoso\n");
}

#[test]
fn test_cli_commit_json_instruction() {
    let home = TempDir::new().unwrap();
    ketik(&home)
        .arg("--pool")
        .arg(fixture_path("names.txt"))
        .args(["--json", "--commit", "Santoso", "Budi Sant"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""replace_start":5"#))
        .stdout(predicate::str::contains(r#""replace_len":4"#))
        .stdout(predicate::str::contains(r#""text":"Budi Santoso""#));
}

#[test]
fn test_cli_excluded_field_from_config() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".config").join("ketik");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[suggestions]\nexcluded_fields = [\"nama\"]\n",
    )
    .unwrap();

    ketik(&home)
        .arg("--pool")
        .arg(fixture_path("names.txt"))
        .arg("bud")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_cli_invalid_config_warns_and_uses_defaults() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".config").join("ketik");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[suggestions\n").unwrap();

    ketik(&home)
        .arg("--pool")
        .arg(fixture_path("names.txt"))
        .arg("bud")
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid config"))
        .stdout(predicate::str::contains("Budi Santoso"));
}

#[test]
fn test_cli_has_no_broad_flag() {
    // A single run starts with an empty cache, so a key scan can never hit
    let home = TempDir::new().unwrap();
    ketik(&home)
        .arg("--pool")
        .arg(fixture_path("names.txt"))
        .args(["--broad", "bud"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--broad"));
}
