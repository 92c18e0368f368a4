use crate::areas::ignore::IgnoreList;
use crate::areas::scanner::Scanner;
use crate::artifacts::report::summary::ScanSummary;
use crate::artifacts::status::inspector::Inspector;
use colored::Colorize;
use derive_new::new;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, new)]
pub struct CheckOptions {
    pub verbose: bool,
    pub show_branch: bool,
}

// Terminology:
// - okay: a clean working tree with no commits waiting to be pushed
// - unstaged changes: `git status -s` would print something for the repo
// - requires push: clean, but the branch is ahead of its configured upstream
impl Scanner {
    pub fn check(&self, options: &CheckOptions) -> anyhow::Result<()> {
        let git_dirs = self.workspace().find_git_repos()?;
        let ignore_list = IgnoreList::load(self.path())?;
        let (git_dirs, ignored_dirs) = ignore_list.partition(git_dirs);

        if options.verbose {
            writeln!(
                self.writer(),
                "Found {} directories containing git repos.",
                git_dirs.len()
            )?;

            if !ignored_dirs.is_empty() {
                writeln!(
                    self.writer(),
                    "Ignoring {} directories containing git repos.",
                    ignored_dirs.len()
                )?;
            }
        }

        let mut summary = ScanSummary::default();

        for git_dir in git_dirs {
            let path = self.display_path(&git_dir);

            match Inspector::open(&git_dir).and_then(|inspector| inspector.inspect(path.clone())) {
                Ok(status) => {
                    if options.verbose {
                        writeln!(self.writer(), "{}", status.summary_line(options.show_branch))?;
                    }
                    summary.record(&status);
                }
                Err(error) => {
                    // reported even without --verbose, then the scan goes on
                    writeln!(
                        self.writer(),
                        "{} {}",
                        format!("{}:", path.display()).blue().bold(),
                        format!("\u{2717} status unavailable ({error:#})").red().bold()
                    )?;
                    summary.record_unreadable(path);
                }
            }
        }

        self.report_summary(&summary, options)
    }

    fn report_summary(&self, summary: &ScanSummary, options: &CheckOptions) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", "Checks completed".green().bold())?;

        if !summary.unstaged().is_empty() {
            writeln!(
                self.writer(),
                "{}",
                format!("Unstaged changes: {}", summary.unstaged().len())
                    .red()
                    .bold()
            )?;

            if options.verbose {
                writeln!(self.writer(), "{}", join_paths(summary.unstaged()).red())?;
            }
        }

        if !summary.requires_push().is_empty() {
            writeln!(
                self.writer(),
                "{}",
                format!("Requires push: {}", summary.requires_push().len())
                    .yellow()
                    .bold()
            )?;

            if options.verbose {
                writeln!(
                    self.writer(),
                    "{}",
                    join_paths(summary.requires_push()).yellow()
                )?;
            }
        }

        if !summary.unreadable().is_empty() {
            writeln!(
                self.writer(),
                "{}",
                format!("Status unavailable: {}", summary.unreadable().len())
                    .red()
                    .bold()
            )?;
        }

        if summary.all_okay() {
            writeln!(
                self.writer(),
                "{}",
                format!("All {} repositories okay.", summary.okay_count())
                    .green()
                    .bold()
            )?;
        } else {
            writeln!(
                self.writer(),
                "{}",
                format!("{}/{} okay", summary.okay_count(), summary.total())
                    .yellow()
                    .bold()
            )?;
        }

        Ok(())
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
