//! Exit codes and stream separation for `hilo`.

use hilo_cli::run;

fn run_args(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(args, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
fn version_returns_zero_on_stdout() {
    let (code, out, err) = run_args(&["hilo", "--version"]);
    assert_eq!(code, 0);
    assert!(out.contains("hilo"));
    assert!(err.is_empty());
}

#[test]
fn unknown_flag_returns_two_on_stderr() {
    let (code, out, err) = run_args(&["hilo", "sim", "--hands", "3"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("For full help, run: hilo --help"));
}

#[test]
fn validation_error_is_written_once() {
    let (code, _, err) = run_args(&["hilo", "sim", "--rounds", "0", "--seed", "1"]);
    assert_eq!(code, 2);
    assert_eq!(err.matches("rounds must be >= 1").count(), 1);
}

#[test]
fn unwritable_transcript_returns_two() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, "x").unwrap();
    let path = blocker.join("t.jsonl");
    let (code, _, err) = run_args(&[
        "hilo",
        "sim",
        "--seed",
        "1",
        "--rounds",
        "1",
        "--transcript",
        path.to_str().unwrap(),
    ]);
    assert_eq!(code, 2);
    assert!(err.contains("Error: I/O error"));
}
