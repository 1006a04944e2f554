//! End-to-end CLI tests.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fsentry() -> Command {
    Command::cargo_bin("fsentry").unwrap()
}

struct Dirs {
    tree: TempDir,
    state: TempDir,
}

impl Dirs {
    fn new() -> Self {
        Self {
            tree: TempDir::new().unwrap(),
            state: TempDir::new().unwrap(),
        }
    }

    fn baseline(&self) -> String {
        self.state.path().join("hashes.json").display().to_string()
    }

    fn audit_log(&self) -> String {
        self.state
            .path()
            .join("integrity_log.txt")
            .display()
            .to_string()
    }

    fn check(&self) -> Command {
        let mut cmd = fsentry();
        cmd.arg("check")
            .arg(self.tree.path())
            .arg("--baseline")
            .arg(self.baseline())
            .arg("--audit-log")
            .arg(self.audit_log())
            .arg("--no-color");
        cmd
    }
}

#[test]
fn bad_root_path_fails_with_clear_error() {
    fsentry()
        .args(["check", "/nonexistent/fsentry-root"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn first_check_reports_new_files_then_goes_quiet() {
    let dirs = Dirs::new();
    std::fs::write(dirs.tree.path().join("a.txt"), "hello").unwrap();

    dirs.check()
        .assert()
        .success()
        .stdout(predicate::str::contains("[NEW FILE]").and(predicate::str::contains("a.txt")));

    dirs.check()
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes detected."));
}

#[test]
fn modified_and_deleted_files_are_classified() {
    let dirs = Dirs::new();
    std::fs::write(dirs.tree.path().join("a.txt"), "v1").unwrap();
    std::fs::write(dirs.tree.path().join("b.txt"), "soon gone").unwrap();
    dirs.check().assert().success();

    std::fs::write(dirs.tree.path().join("a.txt"), "v2").unwrap();
    std::fs::remove_file(dirs.tree.path().join("b.txt")).unwrap();

    dirs.check()
        .assert()
        .success()
        .stdout(
            predicate::str::contains("[MODIFIED]")
                .and(predicate::str::contains("[DELETED]"))
                .and(predicate::str::contains("b.txt")),
        );
}

#[test]
fn scan_is_a_dry_run() {
    let dirs = Dirs::new();
    std::fs::write(dirs.tree.path().join("a.txt"), "hello").unwrap();

    fsentry()
        .arg("scan")
        .arg(dirs.tree.path())
        .arg("--baseline")
        .arg(dirs.baseline())
        .arg("--audit-log")
        .arg(dirs.audit_log())
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("[NEW FILE]"));

    assert!(!dirs.state.path().join("hashes.json").exists());
    assert!(!dirs.state.path().join("integrity_log.txt").exists());
}

#[test]
fn json_output_is_machine_readable() {
    let dirs = Dirs::new();
    std::fs::write(dirs.tree.path().join("a.txt"), "hello").unwrap();

    let output = dirs.check().args(["--output", "json"]).output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["files_scanned"], 1);
    assert_eq!(report["baseline_saved"], true);
    assert_eq!(report["baseline_status"], "missing");
    assert_eq!(report["changes"][0]["kind"], "New");
}

#[test]
fn audit_trail_lines_are_timestamped() {
    let dirs = Dirs::new();
    std::fs::write(dirs.tree.path().join("a.txt"), "hello").unwrap();
    dirs.check().assert().success();

    let trail = std::fs::read_to_string(dirs.audit_log()).unwrap();
    let line = trail.lines().next().unwrap();
    assert!(line.starts_with('['));
    assert!(line.contains("] [NEW FILE] "));
    assert!(line.ends_with("a.txt"));
}
