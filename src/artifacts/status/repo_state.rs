use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RepoState {
    Clean,
    RequiresPush,
    UnstagedChanges,
}

impl RepoState {
    pub fn is_okay(&self) -> bool {
        matches!(self, RepoState::Clean)
    }
}

impl From<&RepoState> for &str {
    fn from(state: &RepoState) -> Self {
        match state {
            RepoState::Clean => "\u{2713}",
            RepoState::RequiresPush => "- Requires push",
            RepoState::UnstagedChanges => "\u{2717} Unstaged changes",
        }
    }
}

impl std::fmt::Display for RepoState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = self.into();
        let colored_label = match self {
            RepoState::Clean => label.green().bold(),
            RepoState::RequiresPush => label.yellow().bold(),
            RepoState::UnstagedChanges => label.red().bold(),
        };
        write!(f, "{}", colored_label)
    }
}
