use crate::common::command::{
    git_commit_all, repository_with_upstream, run_check_command, scan_dir,
};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn repository_ahead_of_upstream_requires_push(
    scan_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = scan_dir;
    let repo_dir = repository_with_upstream(root.path(), "repo_ahead");
    git_commit_all(&repo_dir, "Unpushed commit");

    run_check_command(root.path(), &["-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("repo_ahead: - Requires push"))
        .stdout(predicate::str::contains("Requires push: 1"))
        .stdout(predicate::str::contains("0/1 okay"));

    Ok(())
}

#[rstest]
fn unstaged_changes_take_precedence_over_unpushed_commits(
    scan_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = scan_dir;
    let repo_dir = repository_with_upstream(root.path(), "repo_ahead");
    git_commit_all(&repo_dir, "Unpushed commit");
    crate::common::file::write_file(crate::common::file::FileSpec::new(
        repo_dir.join("scratch.txt"),
        "not added".to_string(),
    ));

    run_check_command(root.path(), &["-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "repo_ahead: \u{2717} Unstaged changes",
        ))
        .stdout(predicate::str::contains("Requires push").not());

    Ok(())
}
