//! Install command integration tests
//!
//! This module tests:
//! - Mirroring into empty, partial and previously installed targets
//! - Backup snapshots
//! - Runtime config seeding
//! - Bundle validation
//! - `--sync` after install
//! - Memory tool registration

mod common;

use std::fs;

use predicates::prelude::*;

use common::{TestEnv, read_tree};

#[test]
fn test_install_into_empty_target() {
    let env = TestEnv::new();

    env.cmd()
        .arg("install")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to back up"));

    env.assert_target_mirrors_bundle();
    assert!(env.snapshots().is_empty());
}

#[cfg(unix)]
#[test]
fn test_install_into_default_target_under_home() {
    let env = TestEnv::new();

    env.cmd()
        .arg("install")
        .env_remove("SKILLPORT_TARGET_DIR")
        .assert()
        .success();

    assert!(env.home.join(".config/opencode/AGENTS.md").is_file());
}

#[test]
fn test_install_with_target_flag() {
    let env = TestEnv::new();
    let custom = env.temp.path().join("custom-target");

    env.cmd()
        .arg("install")
        .arg("--target")
        .arg(&custom)
        .assert()
        .success();

    assert!(custom.join("skills/react-19/SKILL.md").is_file());
    assert!(!env.target.exists());
}

#[test]
fn test_install_with_bundle_flag_from_elsewhere() {
    let env = TestEnv::new();
    let elsewhere = env.create_project("elsewhere");

    env.cmd()
        .current_dir(&elsewhere)
        .arg("install")
        .arg("--bundle")
        .arg(&env.bundle)
        .assert()
        .success();

    env.assert_target_mirrors_bundle();
}

#[test]
fn test_install_over_partial_target_removes_stale_files() {
    let env = TestEnv::new();
    env.write_file("home/.config/opencode/skills/retired/SKILL.md", "retired");
    env.write_file("home/.config/opencode/notes.txt", "not a member");

    env.cmd().arg("install").assert().success();

    env.assert_target_mirrors_bundle();
    assert!(!env.target.join("skills/retired").exists());
    // Only the three members are managed
    assert!(env.target.join("notes.txt").is_file());

    let snapshots = env.snapshots();
    assert_eq!(snapshots.len(), 1);
    assert!(snapshots[0].join("skills/retired/SKILL.md").is_file());
    assert!(!snapshots[0].join("AGENTS.md").exists());
    assert!(!snapshots[0].join("notes.txt").exists());
}

#[test]
fn test_reinstall_snapshots_previous_install() {
    let env = TestEnv::new();
    env.cmd().arg("install").assert().success();
    let installed_skills = read_tree(&env.target.join("skills"));

    env.cmd()
        .arg("install")
        .assert()
        .success()
        .stdout(predicate::str::contains("Backed up previous install"));

    let snapshots = env.snapshots();
    assert_eq!(snapshots.len(), 1);
    let snapshot = &snapshots[0];
    let name = snapshot.file_name().unwrap().to_string_lossy().into_owned();
    assert_eq!(name.len(), "YYYYMMDD-HHMMSS".len());
    assert_eq!(read_tree(&snapshot.join("skills")), installed_skills);
    assert!(snapshot.join("AGENTS.md").is_file());
    assert!(snapshot.join("scripts/setup.sh").is_file());
}

#[test]
fn test_install_run_from_inside_target_keeps_router() {
    let env = TestEnv::new();
    env.cmd().arg("install").assert().success();

    env.cmd()
        .current_dir(&env.target)
        .arg("install")
        .assert()
        .success();

    env.assert_target_mirrors_bundle();
    assert_eq!(env.snapshots().len(), 1);
}

#[test]
fn test_bundle_missing_skills_fails_before_target_exists() {
    let env = TestEnv::new();
    fs::remove_dir_all(env.bundle.join("skills")).unwrap();

    env.cmd()
        .arg("install")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("skills/"));

    assert!(!env.target.exists());
}

#[test]
fn test_runtime_config_created_once_and_preserved() {
    let env = TestEnv::new();

    env.cmd().arg("install").assert().success();
    let config = env.target.join("opencode.json");
    assert_eq!(
        fs::read_to_string(&config).unwrap(),
        fs::read_to_string(env.bundle.join("opencode.template.json")).unwrap()
    );

    fs::write(&config, "{\"model\": \"mine\"}").unwrap();
    env.cmd().arg("install").assert().success();

    assert_eq!(fs::read_to_string(&config).unwrap(), "{\"model\": \"mine\"}");
}

#[test]
fn test_install_with_sync_path() {
    let env = TestEnv::new();
    let project = env.create_project("proj");

    env.cmd()
        .arg("install")
        .arg("--sync")
        .arg(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("Synced into project"));

    let router = fs::read(env.target.join("AGENTS.md")).unwrap();
    let skills = read_tree(&env.target.join("skills"));
    for root in [project.clone(), project.join(".agent")] {
        assert_eq!(fs::read(root.join("AGENTS.md")).unwrap(), router);
        assert_eq!(read_tree(&root.join("skills")), skills);
    }
}

#[test]
fn test_install_with_sync_defaults_to_current_dir() {
    let env = TestEnv::new();
    let project = env.create_project("proj");

    env.cmd()
        .current_dir(&project)
        .arg("install")
        .arg("--bundle")
        .arg(&env.bundle)
        .arg("--sync")
        .assert()
        .success();

    assert!(project.join(".agent/skills/pytest/SKILL.md").is_file());
    assert!(project.join("AGENTS.md").is_file());
}

#[test]
fn test_install_with_sync_into_missing_project_still_succeeds() {
    let env = TestEnv::new();
    let missing = env.temp.path().join("no-such-project");

    env.cmd()
        .arg("install")
        .arg("--sync")
        .arg(&missing)
        .assert()
        .success()
        .stderr(predicate::str::contains("no-such-project"));

    env.assert_target_mirrors_bundle();
    assert!(!missing.exists());
}

#[test]
fn test_malformed_settings_fail_install() {
    let env = TestEnv::new();
    fs::write(env.bundle.join("skillport.yaml"), "upstreams: []\n").unwrap();

    env.cmd()
        .arg("install")
        .assert()
        .failure()
        .stderr(predicate::str::contains("skillport.yaml"));

    assert!(!env.target.exists());
}

#[cfg(unix)]
#[test]
fn test_installed_scripts_are_executable() {
    use std::os::unix::fs::PermissionsExt;

    let env = TestEnv::new();
    env.cmd().arg("install").assert().success();

    let mode = fs::metadata(env.target.join("scripts/setup.sh"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o111, 0o111);
}

#[cfg(unix)]
#[test]
fn test_memory_tool_is_registered_when_on_path() {
    let env = TestEnv::new();
    let log = env.temp.path().join("engram.log");
    env.install_tool("engram", &format!("echo \"$@\" >> '{}'", log.display()));

    env.cmd()
        .arg("install")
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered the memory tool"));

    assert_eq!(fs::read_to_string(&log).unwrap().trim(), "setup opencode");
}

#[cfg(unix)]
#[test]
fn test_failing_registration_does_not_fail_install() {
    let env = TestEnv::new();
    env.install_tool("engram", "exit 7");

    env.cmd()
        .arg("install")
        .assert()
        .success()
        .stderr(predicate::str::contains("warning:"))
        .stderr(predicate::str::contains("engram"));

    env.assert_target_mirrors_bundle();
}
