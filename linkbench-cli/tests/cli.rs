//! End-to-end tests driving the compiled binary over stdin/stdout.

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn linkbench() -> Command {
    Command::cargo_bin("linkbench").expect("binary builds")
}

#[test]
fn scripted_session_round_trips() {
    linkbench()
        .args(["--seed", "7"])
        .write_stdin("fill 1 2 3\nread-all\nread-reverse\nexit\n")
        .assert()
        .success()
        .stdout(
            contains("(Head) 1 <-> 2 <-> 3 (Tail)")
                .and(contains("(Tail) 3 <-> 2 <-> 1 (Head)"))
                .and(contains("bye")),
        );
}

#[test]
fn out_of_range_reports_instead_of_crashing() {
    linkbench()
        .write_stdin("delete 5\nlen\nexit\n")
        .assert()
        .success()
        .stdout(
            contains("delete failed: position 5 out of range for list of length 0")
                .and(contains("list is empty")),
        );
}

#[test]
fn unknown_command_suggests_help() {
    linkbench()
        .write_stdin("frobnicate\nexit\n")
        .assert()
        .success()
        .stdout(contains("unknown command `frobnicate`").and(contains("type `help`")));
}

#[test]
fn seeded_random_fill_is_deterministic() {
    let run = || {
        let output = linkbench()
            .args(["--seed", "42"])
            .write_stdin("random 10\nread-all\nexit\n")
            .output()
            .expect("binary runs");
        let stdout = String::from_utf8(output.stdout).expect("utf8 output");

        // Strip the elapsed-time suffix; only the values are deterministic
        let line = stdout
            .lines()
            .find(|line| line.contains("(Head)"))
            .expect("read-all output")
            .to_string();
        let (values, _timing) = line.rsplit_once(" (").expect("timing suffix");
        values.to_string()
    };

    assert_eq!(run(), run());
}

#[test]
fn end_of_input_terminates_cleanly() {
    linkbench()
        .write_stdin("len\n")
        .assert()
        .success()
        .stdout(contains("list is empty"));
}
