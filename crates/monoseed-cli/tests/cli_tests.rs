//! Binary-level tests. None of these reach an external tool: each run stops
//! at name validation, the overwrite prompt or the dry-run listing.

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `monoseed` invocation isolated from the caller's home, config and `.env`.
fn monoseed(sandbox: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("monoseed");
    cmd.current_dir(sandbox)
        .env("HOME", sandbox)
        .env("XDG_CONFIG_HOME", sandbox.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("MONOREPO_BASE_PATH");
    cmd
}

fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn help_lists_the_arguments() {
    let temp = TempDir::new().unwrap();
    monoseed(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("PROJECT_NAME"))
        .stdout(predicate::str::contains("--base-path"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    monoseed(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_name_is_an_argument_error() {
    let temp = TempDir::new().unwrap();
    monoseed(temp.path()).arg("--yes").assert().code(2);
}

#[test]
fn quiet_conflicts_with_verbose() {
    let temp = TempDir::new().unwrap();
    monoseed(temp.path())
        .args(["demo", "--quiet", "--verbose"])
        .assert()
        .code(2);
}

#[test]
fn invalid_names_exit_one_without_side_effects() {
    for name in ["my app", "shop!", "a/b", "../escape", ""] {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("base");
        fs::create_dir(&base).unwrap();

        monoseed(temp.path())
            .arg(name)
            .env("MONOREPO_BASE_PATH", &base)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Invalid project name"));

        assert!(entries(&base).is_empty(), "{name:?} touched the base path");
    }
}

#[test]
fn declined_overwrite_leaves_directory_untouched() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("base/demo");
    fs::create_dir_all(project.join("backend")).unwrap();
    fs::write(project.join("notes.txt"), "keep me").unwrap();
    fs::write(project.join("backend/app.py"), "print(1)").unwrap();

    monoseed(temp.path())
        .arg("demo")
        .env("MONOREPO_BASE_PATH", temp.path().join("base"))
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Setup cancelled."))
        .stderr(predicate::str::contains("already exists. Remove it?"));

    assert_eq!(entries(&project), vec!["backend", "notes.txt"]);
    assert_eq!(fs::read_to_string(project.join("notes.txt")).unwrap(), "keep me");
    assert_eq!(
        fs::read_to_string(project.join("backend/app.py")).unwrap(),
        "print(1)"
    );
}

#[test]
fn closed_stdin_declines() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("demo");
    fs::create_dir(&project).unwrap();
    fs::write(project.join("notes.txt"), "keep me").unwrap();

    monoseed(temp.path())
        .args(["demo", "--base-path"])
        .arg(temp.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Setup cancelled."));

    assert_eq!(entries(&project), vec!["notes.txt"]);
}

#[test]
fn dry_run_lists_the_plan_and_creates_nothing() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().join("base");
    fs::create_dir(&base).unwrap();

    monoseed(temp.path())
        .args(["demo", "--dry-run"])
        .env("MONOREPO_BASE_PATH", &base)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "would create 'demo' at {}",
            base.join("demo").display()
        )))
        .stdout(predicate::str::contains("==> backend"))
        .stdout(predicate::str::contains("$ uv venv  (in backend)"))
        .stdout(predicate::str::contains("Patch frontend/tsconfig.json"));

    assert!(entries(&base).is_empty());
}

#[test]
fn base_path_flag_beats_environment() {
    let temp = TempDir::new().unwrap();
    let flag = temp.path().join("from-flag");
    let env = temp.path().join("from-env");

    monoseed(temp.path())
        .args(["demo", "--dry-run", "--base-path"])
        .arg(&flag)
        .env("MONOREPO_BASE_PATH", &env)
        .assert()
        .success()
        .stdout(predicate::str::contains(flag.join("demo").display().to_string()));
}

#[test]
fn home_projects_is_the_fallback() {
    let temp = TempDir::new().unwrap();

    monoseed(temp.path())
        .args(["demo", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            temp.path().join("Projects/demo").display().to_string(),
        ));
}

#[test]
fn tools_can_be_renamed_in_the_config_file() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("monoseed.toml");
    fs::write(&config, "[tools]\nnpx = \"bunx\"\n").unwrap();

    monoseed(temp.path())
        .args(["demo", "--dry-run", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("$ bunx create-next-app@latest"));
}

#[test]
fn unreadable_config_exits_four() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("broken.toml");
    fs::write(&config, "[tools\n").unwrap();

    monoseed(temp.path())
        .args(["demo", "--dry-run", "--config"])
        .arg(&config)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}
