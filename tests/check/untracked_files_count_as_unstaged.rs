use crate::common::command::{committed_repository, run_check_command, scan_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn untracked_files_count_as_unstaged(scan_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let root = scan_dir;
    let repo_dir = committed_repository(root.path(), "repo_a");
    write_file(FileSpec::new(
        repo_dir.join("scratch.txt"),
        "not added".to_string(),
    ));

    run_check_command(root.path(), &["-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("repo_a: \u{2717} Unstaged changes"))
        .stdout(predicate::str::contains("Unstaged changes: 1"))
        .stdout(predicate::str::contains("0/1 okay"));

    Ok(())
}

#[rstest]
fn ignored_files_do_not_make_a_repository_dirty(
    scan_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = scan_dir;
    let repo_dir = root.path().join("repo_a");
    std::fs::create_dir_all(&repo_dir)?;
    write_file(FileSpec::new(
        repo_dir.join(".gitignore"),
        "*.log\n".to_string(),
    ));
    crate::common::command::git_init(&repo_dir);
    crate::common::command::git_commit_all(&repo_dir, "Initial commit");
    write_file(FileSpec::new(repo_dir.join("debug.log"), "noise".to_string()));

    run_check_command(root.path(), &[])
        .assert()
        .success()
        .stdout(predicate::str::contains("All 1 repositories okay."));

    Ok(())
}
