use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PLANT: &str = "0192d3e0-1111-7abc-8def-000000000001";

fn cultivo_cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cultivo").unwrap();
    cmd.env("CULTIVO_DATABASE_PATH", temp.path().join("tasks.db"));
    cmd.current_dir(temp.path());
    cmd
}

/// First well-formed UUID embedded in (possibly ANSI-styled) output.
fn extract_uuid(s: &str) -> Option<&str> {
    (0..s.len().saturating_sub(35))
        .filter_map(|i| s.get(i..i + 36))
        .find(|w| uuid::Uuid::parse_str(w).is_ok())
}

#[test]
fn add_and_list_a_one_off_task() {
    let temp = TempDir::new().unwrap();

    cultivo_cmd(&temp)
        .args(["add", "irrigation", "--plant", PLANT, "--date", "2024-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created task"));

    cultivo_cmd(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Irrigation"));
}

#[test]
fn recurring_add_reports_the_series() {
    let temp = TempDir::new().unwrap();

    cultivo_cmd(&temp)
        .args([
            "add",
            "feeding",
            "--plant",
            PLANT,
            "--date",
            "2024-01-01",
            "--every",
            "weekly",
            "--until",
            "2024-01-22",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created recurring task"))
        .stdout(predicate::str::contains("4 instances"));
}

#[test]
fn add_without_a_target_fails() {
    let temp = TempDir::new().unwrap();

    cultivo_cmd(&temp)
        .args(["add", "irrigation", "--date", "2024-03-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no target selected"));
}

#[test]
fn add_rejects_malformed_dates() {
    let temp = TempDir::new().unwrap();

    cultivo_cmd(&temp)
        .args(["add", "irrigation", "--plant", PLANT, "--date", "03/01/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn delete_force_removes_the_task() {
    let temp = TempDir::new().unwrap();

    let output = cultivo_cmd(&temp)
        .args(["add", "pruning", "--plant", PLANT, "--date", "2024-03-01"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let task_id = extract_uuid(&stdout).expect("add output should contain the task ID");

    cultivo_cmd(&temp)
        .args(["delete", task_id, "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted task."));

    cultivo_cmd(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No pending tasks."));
}

#[test]
fn done_toggles_completion() {
    let temp = TempDir::new().unwrap();

    let output = cultivo_cmd(&temp)
        .args(["add", "training", "--plant", PLANT, "--date", "2024-03-01"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let task_id = extract_uuid(&stdout).expect("add output should contain the task ID").to_string();

    cultivo_cmd(&temp)
        .args(["done", &task_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed"));

    // Completed tasks drop out of the pending listing
    cultivo_cmd(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No pending tasks."));

    cultivo_cmd(&temp)
        .args(["done", &task_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reopened"));
}
