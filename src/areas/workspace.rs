use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const GIT_METADATA_DIR: &str = ".git";

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Walks the workspace and collects every directory that holds a `.git`
    /// metadata directory, in sorted order. The walk never descends into
    /// `.git` directories themselves, but does descend into discovered
    /// repositories so nested repositories are found as well.
    pub fn find_git_repos(&self) -> anyhow::Result<Vec<PathBuf>> {
        if !self.path.exists() {
            anyhow::bail!("The specified path does not exist: {:?}", self.path);
        }

        if !self.path.is_dir() {
            anyhow::bail!("The specified path is not a directory: {:?}", self.path);
        }

        let walker = WalkDir::new(&self.path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.file_type().is_dir() && entry.file_name() != OsStr::new(GIT_METADATA_DIR)
            });

        let mut git_dirs = Vec::new();
        for entry in walker {
            let entry = entry?;

            // a `.git` file (linked worktree) is not a repository marker here,
            // and bare repositories have no `.git` entry at all
            if entry.path().join(GIT_METADATA_DIR).is_dir() {
                git_dirs.push(entry.into_path());
            }
        }

        Ok(git_dirs)
    }
}
