use anyhow::Result;
use clap::Parser;
use repocheck::areas::scanner::Scanner;
use repocheck::commands::check::CheckOptions;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "repocheck",
    version = "0.1.0",
    about = "Check the status of git repos in all subdirectories of the given folder",
    long_about = "This command scans a directory tree for git repositories and reports \
    the state of each one: clean, carrying unstaged changes, or ahead of its \
    upstream and requiring a push. A summary is printed at the end of the scan.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        index = 1,
        value_parser = parse_directory,
        help = "Path to the directory to scan (defaults to the current working directory)"
    )]
    dir: Option<PathBuf>,
    #[arg(
        short,
        long,
        help = "Print information on all repositories, not just those requiring attention"
    )]
    verbose: bool,
    #[arg(
        short = 'b',
        long = "branch",
        help = "Output the branch that each repository is currently on"
    )]
    branch: bool,
}

fn parse_directory(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.is_dir() {
        Ok(path)
    } else {
        Err(format!("not a directory: {value}"))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let scanner = match &cli.dir {
        Some(dir) => Scanner::new(&dir.to_string_lossy(), Box::new(std::io::stdout()))?,
        None => {
            let pwd = std::env::current_dir()?;
            Scanner::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?
        }
    };

    scanner.check(&CheckOptions::new(cli.verbose, cli.branch))
}
