use crate::artifacts::status::repo_state::RepoState;
use colored::Colorize;
use derive_new::new;
use std::path::PathBuf;

/// The state of a single repository, under the path it is reported as
/// (relative to the scan root).
#[derive(Debug, Clone, new)]
pub struct StatusInfo {
    pub path: PathBuf,
    pub branch: String,
    pub state: RepoState,
}

impl StatusInfo {
    pub fn summary_line(&self, show_branch: bool) -> String {
        let location = format!("{}:", self.path.display()).blue().bold();
        let mut line = format!("{} {}", location, self.state);

        if show_branch {
            line.push_str(&format!(" - {}", self.branch));
        }

        line
    }
}
