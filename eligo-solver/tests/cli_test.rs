#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

use std::path::PathBuf;
use std::process::Command;
use std::process::Output;
use std::process::Stdio;
use std::time::Duration;

use wait_timeout::ChildExt;

const TEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Writes `instance` to a temporary file, runs the solver on it and returns its output.
fn run_solver(name: &str, instance: &str, args: &[&str]) -> Output {
    let instance_path = std::env::temp_dir().join(format!(
        "eligo-cli-{name}-{}.txt",
        std::process::id()
    ));
    std::fs::write(&instance_path, instance).expect("Failed to write the instance file.");

    let solver = PathBuf::from(env!("CARGO_BIN_EXE_eligo-solver"));
    let mut child = Command::new(solver)
        .args(args)
        .arg(&instance_path)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .stdin(Stdio::null())
        .spawn()
        .expect("Failed to run solver.");

    match child.wait_timeout(TEST_TIMEOUT) {
        Ok(Some(_)) => {}
        Ok(None) => panic!("solver took more than {} seconds", TEST_TIMEOUT.as_secs()),
        Err(e) => panic!("error waiting for solver: {e}"),
    }

    let output = child.wait_with_output().expect("Failed to collect output.");
    let _ = std::fs::remove_file(&instance_path);
    output
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn prints_the_optimal_schedule() {
    let output = run_solver("optimal", "# two machines\n2\n5: 0\n3: 1\n", &[]);
    let text = stdout(&output);

    assert!(output.status.success());
    assert!(text.contains("Status: OPTIMAL"), "{text}");
    assert!(text.contains("Job 0 | Machine 0 | Start 0 | End 5"), "{text}");
    assert!(text.contains("Job 1 | Machine 1 | Start 0 | End 3"), "{text}");
    assert!(text.contains("Total makespan: 5"), "{text}");
}

#[test]
fn jobs_without_a_machine_list_use_every_machine() {
    let output = run_solver("unrestricted", "3\n3\n2\n2\n", &["--time-limit", "10000"]);
    let text = stdout(&output);

    assert!(output.status.success());
    assert!(text.contains("Total makespan: 3"), "{text}");
}

#[test]
fn statistics_are_printed_on_request() {
    let output = run_solver("statistics", "1\n4\n1\n2\n", &["--log-statistics"]);
    let text = stdout(&output);

    assert!(output.status.success());
    assert!(text.contains("Total makespan: 7"), "{text}");
    assert!(text.contains("%% num_nodes="), "{text}");
    assert!(text.contains("%% solve_time="), "{text}");
}

#[test]
fn invalid_instances_fail() {
    let output = run_solver("invalid", "2\n3: 0\n2:\n", &[]);
    let text = stdout(&output);

    assert!(!output.status.success());
    assert!(text.contains("must have at least one allowed machine"), "{text}");
}
