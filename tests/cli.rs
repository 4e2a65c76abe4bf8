mod common;

use assert_fs::TempDir;
use common::command::{compared_dirs, diffee, run_diffee_command, workspace_dir};
use predicates::prelude::{PredicateBooleanExt, predicate};
use rstest::rstest;

#[rstest]
fn print_version(workspace_dir: TempDir) {
    run_diffee_command(workspace_dir.path(), &["--version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[rstest]
fn print_help_without_directories(workspace_dir: TempDir) {
    run_diffee_command(workspace_dir.path(), &[])
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE"));
}

#[rstest]
fn reject_a_side_that_is_not_a_directory(compared_dirs: TempDir) {
    run_diffee_command(compared_dirs.path(), &["left", "left/big.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}

#[rstest]
fn reject_a_missing_side(compared_dirs: TempDir) {
    run_diffee_command(compared_dirs.path(), &["left", "nowhere"])
        .assert()
        .failure();
}

#[rstest]
#[case(&["--size", "--time"])]
#[case(&["--time", "--checksum"])]
#[case(&["--orphans", "--no-orphans"])]
#[case(&["--left-orphans", "--right-orphans"])]
#[case(&["--diff", "--same"])]
#[case(&["--files", "--folders"])]
#[case(&["--flat", "--plain"])]
fn reject_mutually_exclusive_flags(compared_dirs: TempDir, #[case] flags: &[&str]) {
    diffee(compared_dirs.path(), flags).assert().code(2);
}

#[rstest]
fn reject_invalid_patterns(compared_dirs: TempDir) {
    diffee(compared_dirs.path(), &["--exclude", "("])
        .assert()
        .code(2);
}

#[rstest]
fn logs_go_to_stderr(compared_dirs: TempDir) {
    diffee(compared_dirs.path(), &["--plain", "--log-level", "debug"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("scanned workspace"));
}
