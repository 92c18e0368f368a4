use crate::artifacts::status::repo_state::RepoState;
use crate::artifacts::status::status_info::StatusInfo;
use anyhow::Context;
use git2::{Branch, Repository, StatusOptions};
use std::path::{Path, PathBuf};

/// Answers status queries for one repository through libgit2, without
/// spawning git processes.
pub struct Inspector {
    repository: Repository,
}

impl Inspector {
    pub fn open(git_dir: &Path) -> anyhow::Result<Self> {
        let repository = Repository::open(git_dir)
            .with_context(|| format!("Failed to open git repository at {:?}", git_dir))?;

        Ok(Inspector { repository })
    }

    pub fn inspect(&self, path: PathBuf) -> anyhow::Result<StatusInfo> {
        let branch = self.current_branch()?;

        // unstaged changes take precedence over unpushed commits
        let state = if self.has_worktree_changes()? {
            RepoState::UnstagedChanges
        } else if self.commits_ahead_of_upstream()? > 0 {
            RepoState::RequiresPush
        } else {
            RepoState::Clean
        };

        Ok(StatusInfo::new(path, branch, state))
    }

    /// Whether `git status -s` would print anything: staged, modified or
    /// deleted entries, or untracked files. Ignored files do not count.
    fn has_worktree_changes(&self) -> anyhow::Result<bool> {
        let mut options = StatusOptions::new();
        options
            .include_untracked(true)
            .recurse_untracked_dirs(true)
            .include_ignored(false)
            .exclude_submodules(false);

        let statuses = self
            .repository
            .statuses(Some(&mut options))
            .context("Failed to read repository statuses")?;

        Ok(!statuses.is_empty())
    }

    fn current_branch(&self) -> anyhow::Result<String> {
        match self.repository.head() {
            Ok(head) if head.is_branch() => Ok(head.shorthand().unwrap_or("HEAD").to_string()),
            Ok(head) => {
                // detached HEAD, show the short commit id instead
                let oid = head.peel_to_commit()?.id();
                Ok(format!("{:.7}", oid))
            }
            // unborn branch: HEAD exists but points at a branch with no commits
            Err(_) => self.unborn_branch_name(),
        }
    }

    fn unborn_branch_name(&self) -> anyhow::Result<String> {
        let head = self
            .repository
            .find_reference("HEAD")
            .context("Failed to resolve HEAD")?;
        let target = head.symbolic_target().unwrap_or("HEAD");

        Ok(target
            .strip_prefix("refs/heads/")
            .unwrap_or(target)
            .to_string())
    }

    /// Number of commits the checked-out branch carries that its configured
    /// upstream does not. Detached HEADs, unborn branches and branches
    /// without an upstream are never ahead.
    fn commits_ahead_of_upstream(&self) -> anyhow::Result<usize> {
        let head = match self.repository.head() {
            Ok(head) if head.is_branch() => head,
            _ => return Ok(0),
        };

        let local = head.peel_to_commit()?.id();
        let branch = Branch::wrap(head);

        let upstream = match branch.upstream() {
            Ok(upstream) => upstream.get().peel_to_commit()?.id(),
            Err(_) => return Ok(0),
        };

        let (ahead, _behind) = self.repository.graph_ahead_behind(local, upstream)?;

        Ok(ahead)
    }
}
