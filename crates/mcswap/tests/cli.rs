//! Smoke tests of the `mcswap` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn mcswap(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mcswap").unwrap();
    cmd.current_dir(temp.path())
        .env("NO_COLOR", "1")
        .env_remove("MCSWAP_WORKDIR")
        .env_remove("MCSWAP_GAME_DIR")
        .env_remove("MCSWAP_MODRINTH_URL")
        .arg("--workdir")
        .arg(temp.path().join("work"))
        .arg("--game-dir")
        .arg(temp.path().join(".minecraft"))
        .arg("--yes");
    cmd
}

fn setup() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("work")).unwrap();
    temp
}

#[test]
fn help_lists_commands() {
    let temp = setup();
    mcswap(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("apply"))
        .stdout(predicate::str::contains("download"))
        .stdout(predicate::str::contains("game-versions"));
}

#[test]
fn version_command_prints_version() {
    let temp = setup();
    mcswap(&temp)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn create_then_list_shows_selected_profile() {
    let temp = setup();
    mcswap(&temp).args(["create", "mods", "Default"]).assert().success();

    assert!(temp.path().join("work/profiles/Default").is_dir());
    mcswap(&temp)
        .args(["list", "mods"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Default (selected)"));
}

#[test]
fn import_and_apply_round_trip() {
    let temp = setup();
    let jar = temp.path().join("sodium.jar");
    fs::write(&jar, "jar").unwrap();
    let live = temp.path().join(".minecraft/mods");
    fs::create_dir_all(&live).unwrap();
    fs::write(live.join("stale.jar"), "stale").unwrap();

    mcswap(&temp).args(["create", "mods", "Default"]).assert().success();
    mcswap(&temp)
        .args(["import", "mods"])
        .arg(&jar)
        .assert()
        .success();
    mcswap(&temp).args(["apply", "mods"]).assert().success();

    assert!(live.join("sodium.jar").is_file());
    assert!(!live.join("stale.jar").exists());
}

#[test]
fn apply_of_missing_profile_fails() {
    let temp = setup();
    mcswap(&temp)
        .args(["apply", "shaderpacks", "--profile", "Ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn unknown_category_is_rejected() {
    let temp = setup();
    mcswap(&temp)
        .args(["list", "worlds"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
