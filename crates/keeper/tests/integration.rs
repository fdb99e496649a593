//! End-to-end CLI integration tests for the `keeper` binary.
//!
//! Each test gets its own temporary data directory and drives `keeper`
//! as a subprocess via `assert_cmd`, either one line at a time through
//! `exec` or as an interactive session fed from stdin.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build a `Command` targeting the cargo-built `keeper` binary, isolated
/// from the caller's environment.
fn keeper(tmp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("keeper").unwrap();
    cmd.arg("--data-dir")
        .arg(tmp.path())
        .arg("--no-color")
        .env_remove("KEEPER_DATA_DIR")
        .env_remove("KEEPER_TASK_FILE")
        .env_remove("KEEPER_CONTACT_FILE")
        .env_remove("KEEPER_COLOR")
        .env_remove("KEEPER_QUARANTINE_CORRUPTED")
        .env_remove("RUST_LOG")
        .current_dir(tmp.path());
    cmd
}

/// Run one command line through `keeper exec` and expect success.
fn exec_ok(tmp: &TempDir, line: &str) -> String {
    let output = keeper(tmp).args(["exec", line]).output().unwrap();
    assert!(
        output.status.success(),
        "`{line}` failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

fn task_file(tmp: &TempDir) -> PathBuf {
    tmp.path().join("tasks.txt")
}

fn contact_file(tmp: &TempDir) -> PathBuf {
    tmp.path().join("contacts.txt")
}

fn stored_lines(path: PathBuf) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

#[test]
fn todo_is_added_and_stored() {
    let tmp = TempDir::new().unwrap();
    let out = exec_ok(&tmp, "task todo read book");
    assert!(out.contains("[T][ ] read book"), "{out}");
    assert!(out.contains("You now have 1 task."), "{out}");

    assert_eq!(stored_lines(task_file(&tmp)), vec!["T | 0 | read book"]);
}

#[test]
fn exec_accepts_separate_words() {
    let tmp = TempDir::new().unwrap();
    keeper(&tmp)
        .args(["exec", "task", "todo", "water", "plants"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[T][ ] water plants"));
}

#[test]
fn deadline_is_rendered_and_stored() {
    let tmp = TempDir::new().unwrap();
    let out = exec_ok(&tmp, "task deadline submit report /by 2/12/2019 1800");
    assert!(
        out.contains("[D][ ] submit report (by: 02 Dec 2019 18:00)"),
        "{out}"
    );
    assert_eq!(
        stored_lines(task_file(&tmp)),
        vec!["D | 0 | submit report | 02/12/2019 1800"]
    );
}

#[test]
fn event_is_rendered_and_stored() {
    let tmp = TempDir::new().unwrap();
    let out = exec_ok(
        &tmp,
        "task event camp /from 2/3/2026 0800 /to 4/3/2026 1730",
    );
    assert!(
        out.contains("[E][ ] camp (from: 02 Mar 2026 08:00 to: 04 Mar 2026 17:30)"),
        "{out}"
    );
    assert_eq!(
        stored_lines(task_file(&tmp)),
        vec!["E | 0 | camp | 02/03/2026 0800 | 04/03/2026 1730"]
    );
}

#[test]
fn deadline_without_by_fails() {
    let tmp = TempDir::new().unwrap();
    keeper(&tmp)
        .args(["exec", "task deadline submit report"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/by"));
    assert!(!task_file(&tmp).exists());
}

#[test]
fn event_ending_before_start_fails() {
    let tmp = TempDir::new().unwrap();
    keeper(&tmp)
        .args(["exec", "task event camp /from 4/3/2026 0800 /to 2/3/2026 0800"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot end before it starts"));
}

#[test]
fn mark_twice_fails_the_second_time() {
    let tmp = TempDir::new().unwrap();
    exec_ok(&tmp, "task todo read book");

    let out = exec_ok(&tmp, "task mark 1");
    assert!(out.contains("[T][X] read book"), "{out}");
    assert_eq!(stored_lines(task_file(&tmp)), vec!["T | 1 | read book"]);

    keeper(&tmp)
        .args(["exec", "task mark 1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already done"));

    let out = exec_ok(&tmp, "task unmark 1");
    assert!(out.contains("[T][ ] read book"), "{out}");
}

#[test]
fn delete_out_of_range_keeps_the_list() {
    let tmp = TempDir::new().unwrap();
    exec_ok(&tmp, "task todo one");
    exec_ok(&tmp, "task todo two");

    keeper(&tmp)
        .args(["exec", "task delete 99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("99"));

    let out = exec_ok(&tmp, "task list");
    assert!(out.contains("1. [T][ ] one"), "{out}");
    assert!(out.contains("2. [T][ ] two"), "{out}");
    assert_eq!(stored_lines(task_file(&tmp)).len(), 2);
}

#[test]
fn delete_reports_remaining_count() {
    let tmp = TempDir::new().unwrap();
    exec_ok(&tmp, "task todo one");
    exec_ok(&tmp, "task todo two");

    let out = exec_ok(&tmp, "task delete 1");
    assert!(out.contains("[T][ ] one"), "{out}");
    assert!(out.contains("You're down to 1 task."), "{out}");
    assert_eq!(stored_lines(task_file(&tmp)), vec!["T | 0 | two"]);
}

#[test]
fn find_keeps_list_numbers() {
    let tmp = TempDir::new().unwrap();
    exec_ok(&tmp, "task todo buy milk");
    exec_ok(&tmp, "task todo read book");
    exec_ok(&tmp, "task todo return BOOK");

    let out = exec_ok(&tmp, "task find book");
    assert!(out.contains("2. [T][ ] read book"), "{out}");
    assert!(out.contains("3. [T][ ] return BOOK"), "{out}");
    assert!(!out.contains("milk"), "{out}");

    let out = exec_ok(&tmp, "task find pizza");
    assert!(out.contains("No task matches \"pizza\""), "{out}");
}

#[test]
fn empty_list_says_so() {
    let tmp = TempDir::new().unwrap();
    let out = exec_ok(&tmp, "task list");
    assert!(out.contains("No tasks in the list."), "{out}");
    assert!(!task_file(&tmp).exists());
}

#[test]
fn unknown_input_is_rejected() {
    let tmp = TempDir::new().unwrap();
    keeper(&tmp)
        .args(["exec", "blah"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category"));
    keeper(&tmp)
        .args(["exec", "task fly"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown command \"fly\""));
}

// ---------------------------------------------------------------------------
// Contacts
// ---------------------------------------------------------------------------

#[test]
fn contact_is_added_and_stored() {
    let tmp = TempDir::new().unwrap();
    let out = exec_ok(
        &tmp,
        "contact add /name John /phone 91234567 /email john@x.com",
    );
    assert!(
        out.contains("Name: John | Phone: 91234567 | Email: john@x.com"),
        "{out}"
    );
    assert!(out.contains("You now have 1 contact."), "{out}");
    assert_eq!(
        stored_lines(contact_file(&tmp)),
        vec!["John | 91234567 | john@x.com"]
    );
    assert!(!task_file(&tmp).exists());
}

#[test]
fn contact_with_bad_phone_is_rejected() {
    let tmp = TempDir::new().unwrap();
    keeper(&tmp)
        .args(["exec", "contact add /name John /phone 123 /email bad"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("phone"));
    assert!(!contact_file(&tmp).exists());
}

#[test]
fn contact_find_and_delete() {
    let tmp = TempDir::new().unwrap();
    exec_ok(&tmp, "contact add /name John Tan /phone 91234567 /email john@x.com");
    exec_ok(&tmp, "contact add /name Mary /phone 81234567 /email mary@x.com");

    let out = exec_ok(&tmp, "contact find mary");
    assert!(out.contains("2. Name: Mary"), "{out}");
    assert!(!out.contains("John"), "{out}");

    let out = exec_ok(&tmp, "contact delete 1");
    assert!(out.contains("You're down to 1 contact."), "{out}");
    assert_eq!(
        stored_lines(contact_file(&tmp)),
        vec!["Mary | 81234567 | mary@x.com"]
    );
}

// ---------------------------------------------------------------------------
// Interactive session
// ---------------------------------------------------------------------------

#[test]
fn session_greets_runs_and_says_goodbye() {
    let tmp = TempDir::new().unwrap();
    keeper(&tmp)
        .write_stdin("task todo read book\n\ntask list\nbye\ntask todo ignored\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Oh great. You're back."))
        .stdout(predicate::str::contains("1. [T][ ] read book"))
        .stdout(predicate::str::contains("Finally. Peace and quiet."))
        .stdout(predicate::str::contains("ignored").not());

    assert_eq!(stored_lines(task_file(&tmp)), vec!["T | 0 | read book"]);
}

#[test]
fn session_survives_bad_lines() {
    let tmp = TempDir::new().unwrap();
    keeper(&tmp)
        .write_stdin("task mark 1\nnonsense\ntask todo still here\nbye\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Wow. That didn't work."))
        .stdout(predicate::str::contains("[T][ ] still here"));
}

#[test]
fn end_of_input_still_saves() {
    let tmp = TempDir::new().unwrap();
    keeper(&tmp)
        .arg("--quiet")
        .write_stdin("contact add /name Ann /phone 61234567 /email ann@x.org\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Oh great").not())
        .stdout(predicate::str::contains("Finally").not());

    assert_eq!(
        stored_lines(contact_file(&tmp)),
        vec!["Ann | 61234567 | ann@x.org"]
    );
}

#[test]
fn session_reloads_previous_state() {
    let tmp = TempDir::new().unwrap();
    keeper(&tmp)
        .write_stdin("task todo first\ntask mark 1\nbye\n")
        .assert()
        .success();
    keeper(&tmp)
        .write_stdin("task list\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. [T][X] first"));
}

#[test]
fn invalid_utf8_line_does_not_end_session() {
    let tmp = TempDir::new().unwrap();
    let input: &[u8] = b"task todo first\ntask todo caf\xff\n\
        task todo after\ntask list\nbye\n";
    keeper(&tmp)
        .arg("--quiet")
        .write_stdin(input)
        .assert()
        .success()
        .stderr(predicate::str::contains("not valid UTF-8"))
        .stdout(predicate::str::contains("2. [T][ ] after"));

    assert_eq!(
        stored_lines(task_file(&tmp)),
        vec!["T | 0 | first", "T | 0 | after"]
    );
}

#[test]
fn json_session_prints_one_view_per_line() {
    let tmp = TempDir::new().unwrap();
    let output = keeper(&tmp)
        .arg("--json")
        .write_stdin("task todo a\ntask mark 5\n")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("Oh great"), "{stdout}");

    let views: Vec<serde_json::Value> = serde_json::Deserializer::from_str(&stdout)
        .into_iter()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(views.len(), 2);
    assert_eq!(views[0]["ok"], true);
    assert_eq!(views[1]["ok"], false);
    assert!(views[1]["error"].as_str().unwrap().contains("does not exist"));
}

// ---------------------------------------------------------------------------
// Storage problems
// ---------------------------------------------------------------------------

#[test]
fn corrupted_store_is_quarantined() {
    let tmp = TempDir::new().unwrap();
    fs::write(task_file(&tmp), "T | 0 | fine\nnot a task\n").unwrap();

    keeper(&tmp)
        .args(["exec", "task list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks in the list."))
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("tasks.txt.corrupted"));

    let moved = tmp.path().join("tasks.txt.corrupted");
    assert_eq!(
        fs::read_to_string(moved).unwrap(),
        "T | 0 | fine\nnot a task\n"
    );
}

#[test]
fn invalid_utf8_store_is_quarantined() {
    let tmp = TempDir::new().unwrap();
    let original: &[u8] = b"T | 0 | keep me\nT | 0 | caf\xff\n";
    fs::write(task_file(&tmp), original).unwrap();

    keeper(&tmp)
        .write_stdin("task todo fresh\nbye\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("tasks.txt.corrupted"));

    let moved = tmp.path().join("tasks.txt.corrupted");
    assert_eq!(fs::read(moved).unwrap(), original);
    assert_eq!(stored_lines(task_file(&tmp)), vec!["T | 0 | fresh"]);
}

#[test]
fn corrupted_store_is_kept_without_quarantine() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("keeper.yaml"), "quarantine_corrupted: false\n").unwrap();
    fs::write(task_file(&tmp), "T | 0 | fine\nnot a task\n").unwrap();

    keeper(&tmp)
        .write_stdin("task list\ncontact add /name Cy /phone 51234567 /email cy@x.io\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("moved to").not());

    assert_eq!(
        fs::read_to_string(task_file(&tmp)).unwrap(),
        "T | 0 | fine\nnot a task\n"
    );
    assert!(!tmp.path().join("tasks.txt.corrupted").exists());
    assert_eq!(
        stored_lines(contact_file(&tmp)),
        vec!["Cy | 51234567 | cy@x.io"]
    );
}

#[test]
fn corrupted_tasks_leave_contacts_alone() {
    let tmp = TempDir::new().unwrap();
    exec_ok(&tmp, "contact add /name Bo /phone 71234567 /email bo@x.io");
    fs::write(task_file(&tmp), "Z | 0 | what\n").unwrap();

    let out = exec_ok(&tmp, "contact list");
    assert!(out.contains("1. Name: Bo"), "{out}");
}

// ---------------------------------------------------------------------------
// Other subcommands
// ---------------------------------------------------------------------------

#[test]
fn exec_json_output() {
    let tmp = TempDir::new().unwrap();
    let output = keeper(&tmp)
        .args(["--json", "exec", "task todo read book"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["ok"], true);
    assert!(json["response"].as_str().unwrap().contains("read book"));
}

#[test]
fn paths_follow_flags() {
    let tmp = TempDir::new().unwrap();
    keeper(&tmp)
        .args(["--tasks", "todo.txt", "paths"])
        .assert()
        .success()
        .stdout(predicate::str::contains("todo.txt"))
        .stdout(predicate::str::contains("contacts.txt"))
        .stdout(predicate::str::contains("keeper.yaml"));
}

#[test]
fn custom_task_file_is_used() {
    let tmp = TempDir::new().unwrap();
    keeper(&tmp)
        .args(["--tasks", "todo.txt", "exec", "task todo x"])
        .assert()
        .success();
    assert!(tmp.path().join("todo.txt").exists());
    assert!(!task_file(&tmp).exists());
}

#[test]
fn config_init_writes_yaml() {
    let tmp = TempDir::new().unwrap();
    keeper(&tmp)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("keeper.yaml"));
    let yaml = fs::read_to_string(tmp.path().join("keeper.yaml")).unwrap();
    assert!(yaml.contains("task_file: tasks.txt"), "{yaml}");
}

#[test]
fn completion_bash() {
    let tmp = TempDir::new().unwrap();
    keeper(&tmp)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("keeper"));
}

#[test]
fn version_flag() {
    Command::cargo_bin("keeper")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("keeper"));
}
