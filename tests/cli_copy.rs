//! CLI coverage for the copy command.
//!
//! Successful copies need a reachable clipboard and are covered by the
//! mock-driven unit tests; here we exercise the surface that never touches
//! one.

mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn empty_stdin_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("copy")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to copy yet. Generate a prompt first."));
}

#[test]
fn whitespace_only_stdin_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("copy")
        .write_stdin("  \n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to copy yet. Generate a prompt first."));
}

#[test]
fn copy_alias_is_recognized() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("c")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to copy yet. Generate a prompt first."));
}
