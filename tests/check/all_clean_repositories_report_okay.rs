use crate::common::command::{committed_repository, run_check_command, scan_dir};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn all_clean_repositories_report_okay(scan_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let root = scan_dir;
    committed_repository(root.path(), "repo_a");
    committed_repository(root.path(), "repo_b");

    run_check_command(root.path(), &[])
        .assert()
        .success()
        .stdout(predicate::str::contains("Checks completed"))
        .stdout(predicate::str::contains("All 2 repositories okay."))
        .stdout(predicate::str::contains("Unstaged changes").not())
        .stdout(predicate::str::contains("Requires push").not());

    Ok(())
}
