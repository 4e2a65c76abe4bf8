use crate::common::file::{create_directory, write_files};
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn workspace_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

/// `left/` and `right/` inside one temporary directory:
///
/// ```text
/// left/                 right/
/// ├── a/                ├── a/
/// │   └── x.txt         │   └── ░░░░░
/// ├── big.txt           ├── big.txt
/// ├── changed.txt       ├── changed.txt
/// ├── common.txt        ├── common.txt
/// └── ░░░░░░░░░░░░░░    └── only_right.txt
/// ```
#[fixture]
pub fn compared_dirs(workspace_dir: TempDir) -> TempDir {
    let left = workspace_dir.path().join("left");
    let right = workspace_dir.path().join("right");

    write_files(
        &left,
        &[
            ("a/x.txt", "x"),
            ("big.txt", "12345"),
            ("changed.txt", "one"),
            ("common.txt", "same"),
        ],
    );
    create_directory(&right.join("a"));
    write_files(
        &right,
        &[
            ("big.txt", "1"),
            ("changed.txt", "two"),
            ("common.txt", "same"),
            ("only_right.txt", "r"),
        ],
    );

    workspace_dir
}

pub fn run_diffee_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("diffee").expect("Failed to find diffee binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.env_remove("DIFFEE_LOG");
    cmd.current_dir(dir);
    cmd.arg("--no-color");
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Compare `left` with `right` inside `dir`
pub fn diffee(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = run_diffee_command(dir, args);
    cmd.args(["left", "right"]);
    cmd
}
