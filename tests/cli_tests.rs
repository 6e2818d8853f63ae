// tests/cli_tests.rs
use assert_cmd::Command;
use clap::error::ErrorKind;
use clap::Parser;
use coveron::cli::Args;
use predicates::prelude::*;

#[test]
fn help_displays_correctly() {
    Command::cargo_bin("coveron")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--CVR_COMPILER_EXEC"));
}

#[test]
fn version_displays_correctly() {
    let version = env!("CARGO_PKG_VERSION");
    Command::cargo_bin("coveron").unwrap().arg("--version").assert().success().stdout(predicate::str::contains(version));
}

#[test]
fn missing_compiler_exec_fails() {
    Command::cargo_bin("coveron").unwrap().assert().failure().stderr(predicate::str::contains("CVR_COMPILER_EXEC"));
}

#[test]
fn unrecognized_sources_are_reported_as_detected_zero() {
    // No `.c`/`.cpp`/`.c++` file among the passthrough args: nothing to
    // instrument, so the run succeeds without touching the (nonexistent)
    // downstream compiler.
    Command::cargo_bin("coveron")
        .unwrap()
        .args(["--CVR_COMPILER_EXEC", "/usr/bin/gcc", "--CVR_VERBOSE"])
        .assert()
        .success()
        .stderr(predicate::str::contains("0 translation unit(s) detected"));
}

#[test]
fn an_unbound_ast_provider_fails_each_detected_source() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("main.c");
    std::fs::write(&source, "int main(void) { return 0; }").unwrap();

    Command::cargo_bin("coveron")
        .unwrap()
        .args(["--CVR_COMPILER_EXEC", "/usr/bin/gcc"])
        .arg(&source)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no concrete AST provider is bound"));
}

#[test]
fn parses_toggle_flags_and_passthrough() {
    let args = Args::try_parse_from([
        "coveron",
        "--CVR_COMPILER_EXEC",
        "/usr/bin/gcc",
        "--CVR_NO_CHECKPOINT",
        "--CVR_FORCE",
        "main.c",
        "-Wall",
        "-O2",
    ])
    .unwrap();
    assert!(args.no_checkpoint);
    assert!(args.force);
    assert!(!args.no_evaluation);
    assert_eq!(args.passthrough, vec!["main.c", "-Wall", "-O2"]);
}

#[test]
fn missing_compiler_exec_is_a_clap_error() {
    let result = Args::try_parse_from(["coveron"]);
    assert!(result.is_err());
    assert_eq!(result.unwrap_err().kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn output_flag_accepts_both_short_and_long_forms() {
    let short = Args::try_parse_from(["coveron", "--CVR_COMPILER_EXEC", "/usr/bin/gcc", "-o", "/tmp/out"]).unwrap();
    assert_eq!(short.output.unwrap(), std::path::PathBuf::from("/tmp/out"));

    let long = Args::try_parse_from(["coveron", "--CVR_COMPILER_EXEC", "/usr/bin/gcc", "--output", "/tmp/out"]).unwrap();
    assert_eq!(long.output.unwrap(), std::path::PathBuf::from("/tmp/out"));
}
