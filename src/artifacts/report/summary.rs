use crate::artifacts::status::repo_state::RepoState;
use crate::artifacts::status::status_info::StatusInfo;
use std::path::PathBuf;

/// Running tallies for the end-of-scan report.
#[derive(Debug, Default)]
pub struct ScanSummary {
    okay: usize,
    unstaged: Vec<PathBuf>,
    requires_push: Vec<PathBuf>,
    unreadable: Vec<PathBuf>,
}

impl ScanSummary {
    pub fn record(&mut self, status: &StatusInfo) {
        match status.state {
            RepoState::Clean => self.okay += 1,
            RepoState::RequiresPush => self.requires_push.push(status.path.clone()),
            RepoState::UnstagedChanges => self.unstaged.push(status.path.clone()),
        }
    }

    /// Repositories that could not be opened or queried still count towards
    /// the grand total, so they are visible in the closing `okay` ratio.
    pub fn record_unreadable(&mut self, path: PathBuf) {
        self.unreadable.push(path);
    }

    pub fn okay_count(&self) -> usize {
        self.okay
    }

    pub fn unstaged(&self) -> &[PathBuf] {
        &self.unstaged
    }

    pub fn requires_push(&self) -> &[PathBuf] {
        &self.requires_push
    }

    pub fn unreadable(&self) -> &[PathBuf] {
        &self.unreadable
    }

    pub fn total(&self) -> usize {
        self.okay + self.unstaged.len() + self.requires_push.len() + self.unreadable.len()
    }

    pub fn all_okay(&self) -> bool {
        self.okay == self.total()
    }
}
