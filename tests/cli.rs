use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_ish(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_ish"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start ish");
    child
        .stdin
        .as_mut()
        .expect("stdin not captured")
        .write_all(stdin.as_bytes())
        .expect("failed to write stdin");
    child.wait_with_output().expect("failed to wait for ish")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn help_flag_prints_usage_to_stdout_and_exits_nonzero() {
    let output = run_ish(&["-h"], "");
    assert!(
        stdout_of(&output).starts_with("Usage:"),
        "stdout: {:?}",
        stdout_of(&output)
    );
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn long_help_flag_behaves_like_short() {
    let output = run_ish(&["--help"], "");
    assert!(stdout_of(&output).starts_with("Usage:"));
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn version_flag_prints_banner_and_exits_nonzero() {
    let output = run_ish(&["-v"], "");
    assert!(
        stdout_of(&output).starts_with("ish v"),
        "stdout: {:?}",
        stdout_of(&output)
    );
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn clustered_short_flags_are_accepted() {
    // -qx must behave exactly like -q -x.
    let output = run_ish(&["-qx"], "true\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "");
}

#[test]
fn help_inside_cluster_still_prints_usage() {
    let output = run_ish(&["-qh"], "");
    assert!(stdout_of(&output).starts_with("Usage:"));
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn quiet_flag_suppresses_prompt() {
    let output = run_ish(&["-q"], "true\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "");
}

#[test]
fn clean_eof_exits_zero() {
    let output = run_ish(&["-q"], "");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn quick_exit_terminates_on_failing_command() {
    let output = run_ish(&["-q", "-x"], "false\ntrue\n");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn quick_exit_fires_inside_if_condition() {
    // The condition's own failure terminates the interpreter before any
    // branch runs; the alternative's success must not mask it.
    let output = run_ish(&["-q", "-x"], "if false then { true } else { true }\n");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn quick_exit_fires_on_failing_branch() {
    let output = run_ish(
        &["-q", "-x"],
        "if true then { sh -c 'exit 7' } else { true }\n",
    );
    assert_eq!(output.status.code(), Some(7));
}

#[test]
fn quick_exit_leaves_successful_lines_alone() {
    let output = run_ish(&["-q", "-x"], "true\ntrue\n");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn exit_builtin_sets_interpreter_status() {
    let output = run_ish(&["-q"], "exit 7\n");
    assert_eq!(output.status.code(), Some(7));
}

#[test]
fn last_status_is_available_as_question_mark() {
    let output = run_ish(&["-q"], "sh -c 'exit 3'\necho ${?}\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "3\n");
}
