use crate::areas::workspace::Workspace;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

pub struct Scanner {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
}

impl Scanner {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path);

        if !path.exists() {
            anyhow::bail!("Directory does not exist at {:?}", path);
        }

        let path = path.canonicalize()?;
        let workspace = Workspace::new(path.clone().into_boxed_path());

        Ok(Scanner {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            workspace,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Repository paths are reported relative to the scan root; the scan root
    /// itself shows up as `.`.
    pub(crate) fn display_path(&self, git_dir: &Path) -> PathBuf {
        match git_dir.strip_prefix(&self.path) {
            Ok(relative) if relative.as_os_str().is_empty() => PathBuf::from("."),
            Ok(relative) => relative.to_path_buf(),
            Err(_) => git_dir.to_path_buf(),
        }
    }
}
