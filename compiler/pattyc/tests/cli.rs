// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests of the `patty` binary.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;

fn demo(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../demos")
        .join(name)
}

fn patty(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_patty"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn patty");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

fn write_program(dir: &tempfile::TempDir, source: &str) -> String {
    let path = dir.path().join("program.patty");
    std::fs::write(&path, source).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn fizzbuzz_demo() {
    let output = patty(&[demo("fizzbuzz.patty").to_str().unwrap()], "");
    assert!(output.status.success(), "{}", stderr_of(&output));
    assert_eq!(
        stdout_of(&output),
        "1\n2\nFizz\n4\nBuzz\nFizz\n7\n8\nFizz\nBuzz\n11\nFizz\n13\n14\nFizzBuzz\nnil\n"
    );
}

#[test]
fn fibonacci_demo() {
    let output = patty(&[demo("fibonacci.patty").to_str().unwrap()], "");
    assert!(output.status.success(), "{}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "(0 1 1 2 3 5 8 13 21 34)\n");
}

#[test]
fn squares_demo() {
    let output = patty(&[demo("squares.patty").to_str().unwrap()], "");
    assert!(output.status.success(), "{}", stderr_of(&output));
    assert_eq!(
        stdout_of(&output),
        "(100 200 0 1 4)\n(4 9 16)\n(0 3 6 9)\n"
    );
}

#[test]
fn reads_from_stdin() {
    let output = patty(&[demo("sum_input.patty").to_str().unwrap()], "19\n23\n");
    assert!(output.status.success(), "{}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "19 + 23 = 42\nnil\n");
}

#[test]
fn engine_errors_exit_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let program = write_program(&dir, "(do (print \"before\") (+ 1 missing))");
    let output = patty(&[&program], "");
    assert!(!output.status.success());
    assert_eq!(stdout_of(&output), "before\n");
    assert_eq!(
        stderr_of(&output),
        "patty: error: cannot resolve symbol missing\n"
    );
}

#[test]
fn read_errors_exit_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let program = write_program(&dir, "(print ~)");
    let output = patty(&[&program], "");
    assert!(!output.status.success());
    assert_eq!(
        stderr_of(&output),
        "patty: error: unexpected character '~' at byte 7\n"
    );
}

#[test]
fn max_depth_flag_stops_runaway_recursion() {
    let dir = tempfile::tempdir().unwrap();
    let program = write_program(&dir, "(do (def f (fun (k) (f (+ k 1)))) (f 0))");
    let output = patty(&["--max-depth", "100", &program], "");
    assert!(!output.status.success());
    assert_eq!(
        stderr_of(&output),
        "patty: error: maximum call depth exceeded (limit: 100)\n"
    );
}

#[test]
fn no_eval_prints_the_program() {
    let dir = tempfile::tempdir().unwrap();
    let program = write_program(&dir, "# comment\n(print \"x\")\n");
    let output = patty(&["--no-eval", &program], "");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "(print \"x\")\n");
}

#[test]
fn missing_filename_is_a_usage_error() {
    let output = patty(&[], "");
    assert!(!output.status.success());
    let stderr = stderr_of(&output);
    assert!(stderr.starts_with("patty: error: REPL mode is not implemented yet\nusage: patty"));
}

#[test]
fn unreadable_file_is_reported() {
    let output = patty(&["/nonexistent/program.patty"], "");
    assert!(!output.status.success());
    assert!(stderr_of(&output).starts_with("patty: error: cannot open file '/nonexistent/program.patty'"));
}

#[test]
fn help_prints_usage() {
    let output = patty(&["--help"], "");
    assert!(output.status.success());
    assert!(stdout_of(&output).starts_with("usage: patty [options] <filename>"));
}
