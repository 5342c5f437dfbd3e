//! End-to-end hook runs against a scratch git repository.

use std::fs;
use std::path::Path;
use std::process::Command;

use docgate::config::GateConfig;
use docgate::gate::{self, Verdict};
use docgate::hook::{self, payload::PermissionDecision};
use tempfile::TempDir;

const SOURCE: &str = "src/main/java/com/erp/attendance/service/AttendanceService.java";

fn git(root: &Path, args: &[&str]) -> bool {
    Command::new("git")
        .args(args)
        .current_dir(root)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Scratch repository, or `None` when git is unavailable.
fn repo() -> Option<TempDir> {
    let dir = TempDir::new().unwrap();
    if !git(dir.path(), &["init", "-q"]) {
        eprintln!("git unavailable, skipping");
        return None;
    }
    Some(dir)
}

fn write(root: &Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "x\n").unwrap();
}

fn stage(root: &Path, rel: &str) {
    write(root, rel);
    assert!(git(root, &["add", rel]));
}

fn payload(command: &str, cwd: &Path) -> String {
    serde_json::json!({
        "hook_event_name": "PreToolUse",
        "tool_name": "Bash",
        "tool_input": { "command": command },
        "cwd": cwd.display().to_string(),
    })
    .to_string()
}

#[tokio::test]
async fn nothing_staged_allows() {
    let Some(dir) = repo() else { return };
    let verdict = gate::run(dir.path(), &GateConfig::default()).await;
    assert_eq!(verdict, Verdict::Allow);
}

#[tokio::test]
async fn missing_docs_denies_commit() {
    let Some(dir) = repo() else { return };
    stage(dir.path(), SOURCE);

    let out = hook::handle(&payload("git commit -m 'attendance'", dir.path()), None)
        .await
        .unwrap()
        .expect("denial expected");

    let decision = out.hook_specific_output;
    assert_eq!(decision.permission_decision, PermissionDecision::Deny);
    assert_eq!(decision.hook_event_name, "PreToolUse");
    let reason = decision.permission_decision_reason;
    assert!(reason.contains("Changed source files: 1"));
    assert!(reason.contains("Detected features: attendance"));
    assert!(reason.contains("src/docs/ERROR_MESSAGES.md"));
    assert!(reason.contains("src/docs/user-guide/attendance.md"));
}

#[tokio::test]
async fn non_commit_command_skips_gate() {
    let Some(dir) = repo() else { return };
    stage(dir.path(), SOURCE);

    let out = hook::handle(&payload("git status", dir.path()), None)
        .await
        .unwrap();
    assert!(out.is_none());
}

#[tokio::test]
async fn documented_feature_allows_commit() {
    let Some(dir) = repo() else { return };
    stage(dir.path(), SOURCE);
    stage(dir.path(), "src/docs/ERROR_MESSAGES.md");
    stage(dir.path(), "src/docs/Attendance_spec.md");
    stage(dir.path(), "src/docs/architecture/attendance.md");
    stage(dir.path(), "src/docs/user-guide/attendance.md");

    let out = hook::handle(&payload("git commit -am done", dir.path()), None)
        .await
        .unwrap();
    assert!(out.is_none());
}

#[tokio::test]
async fn unstaged_docs_on_disk_still_count_as_present() {
    let Some(dir) = repo() else { return };
    stage(dir.path(), SOURCE);
    write(dir.path(), "src/docs/ERROR_MESSAGES.md");
    write(dir.path(), "src/docs/attendance_spec.md");
    write(dir.path(), "src/docs/architecture/attendance.md");
    write(dir.path(), "src/docs/user-guide/attendance.md");

    // Only warnings remain, which never deny
    let verdict = gate::run(dir.path(), &GateConfig::default()).await;
    assert_eq!(verdict, Verdict::Allow);
}

#[tokio::test]
async fn override_root_beats_payload_cwd() {
    let Some(dir) = repo() else { return };
    stage(dir.path(), SOURCE);
    let elsewhere = TempDir::new().unwrap();

    let out = hook::handle(
        &payload("git commit -m x", elsewhere.path()),
        Some(dir.path().to_path_buf()),
    )
    .await
    .unwrap();
    assert!(out.is_some());
}

#[tokio::test]
async fn wrapped_commit_is_still_gated() {
    let Some(dir) = repo() else { return };
    stage(dir.path(), SOURCE);

    for command in ["bash -c 'git commit -m x'", "/usr/bin/git commit -m x"] {
        let out = hook::handle(&payload(command, dir.path()), None)
            .await
            .unwrap();
        assert!(out.is_some(), "expected denial for {command}");
    }
}
