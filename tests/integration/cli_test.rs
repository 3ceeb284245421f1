//! Argument parsing and exit codes

use assert_cmd::Command;
use predicates::prelude::*;

use crate::helpers::Sandbox;

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn help_exits_0_and_shows_attribution() {
    Command::cargo_bin("bapple")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: bapple"))
        .stdout(predicate::str::contains("--chafa-args"))
        .stdout(predicate::str::contains("--no-audio"))
        .stdout(predicate::str::contains("Alstroemeria Records"));
}

#[test]
fn version_exits_0() {
    Command::cargo_bin("bapple")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// Invalid Arguments
// ============================================================================

#[test]
fn unknown_flag_exits_1() {
    let run = Sandbox::new().run(&["--bogus"]);
    assert_eq!(run.code, 1);
    assert!(run.stderr.contains("--bogus"));
}

#[test]
fn zero_width_exits_1() {
    let run = Sandbox::new().run(&["--width", "0"]);
    assert_eq!(run.code, 1);
    assert!(run.stderr.contains("--width"));
}

#[test]
fn non_numeric_fps_exits_1() {
    let run = Sandbox::new().run(&["--fps", "fast"]);
    assert_eq!(run.code, 1);
}

// ============================================================================
// Dependency Check
// ============================================================================

#[test]
fn missing_tools_are_all_listed() {
    let run = Sandbox::new().with_video().run(&[]);

    assert_eq!(run.code, 1);
    assert!(run.stderr.contains("Error: Missing required dependencies"));
    assert!(run.stderr.contains("ffmpeg (from ffmpeg)"));
    assert!(run.stderr.contains("chafa (from chafa)"));
    assert!(run.stderr.contains("ffplay (from ffmpeg)"));
}

#[test]
fn ffplay_not_required_without_audio() {
    let run = Sandbox::new().with_video().run(&["--no-audio"]);

    assert_eq!(run.code, 1);
    assert!(run.stderr.contains("chafa (from chafa)"));
    assert!(!run.stderr.contains("ffplay"));
}
