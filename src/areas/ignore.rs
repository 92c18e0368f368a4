use std::path::{Path, PathBuf};

const CHECK_IGNORE_FILE: &str = ".check_ignore";

/// Directory names excluded from status checks, read from a `.check_ignore`
/// file at the scan root (one name per line).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IgnoreList {
    names: Vec<String>,
}

impl IgnoreList {
    pub fn load(root: &Path) -> anyhow::Result<Self> {
        let ignore_file = root.join(CHECK_IGNORE_FILE);

        if !ignore_file.is_file() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&ignore_file)?;
        Ok(Self::parse(&content))
    }

    fn parse(content: &str) -> Self {
        let names = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect::<Vec<_>>();

        IgnoreList { names }
    }

    pub fn is_ignored(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| self.names.iter().any(|ignored| name == ignored.as_str()))
            .unwrap_or(false)
    }

    /// Splits the discovered repositories into (checked, ignored).
    pub fn partition(&self, git_dirs: Vec<PathBuf>) -> (Vec<PathBuf>, Vec<PathBuf>) {
        git_dirs.into_iter().partition(|dir| !self.is_ignored(dir))
    }
}
