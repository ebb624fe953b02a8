//! CLI argument parsing using clap derive

use clap::Parser;

/// Reconcile file-name casing between the git index and the working tree
#[derive(Parser, Debug)]
#[command(name = "git-fixcase")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// List every tracked entry and its on-disk casing
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// List entries whose recorded casing differs from the working tree
    #[arg(short = 'l', long = "list")]
    pub list: bool,

    /// Fix file case in git to match the file system's case for the files
    #[arg(short = 'f', long = "fix-index", conflicts_with = "fix_filesystem")]
    pub fix_index: bool,

    /// Fix file case in the file system to match git's case for the files
    #[arg(short = 'g', long = "fix-filesystem")]
    pub fix_filesystem: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Whether any listing or fix was requested.
    pub fn has_action(&self) -> bool {
        self.all || self.list || self.fix_index || self.fix_filesystem
    }
}
