//! CLI module for the CODEOWNERS tool.
//!
//! This module provides command-line argument parsing using Clap with
//! environment variable support.

pub mod config;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// GitHub CODEOWNERS tool - formats and inspects CODEOWNERS files.
#[derive(Parser, Debug)]
#[command(name = "github-codeowners")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the repository root, used to locate the CODEOWNERS file.
    #[arg(long, env = "REPOSITORY_PATH", default_value = ".", global = true)]
    pub repository_path: PathBuf,

    /// Explicit path to the CODEOWNERS file (skips the repository lookup).
    #[arg(long, env = "CODEOWNERS_PATH", global = true)]
    pub codeowners_path: Option<PathBuf>,

    /// Increase verbosity level (-v for info, -vv for debug, -vvv for trace).
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Rewrite the CODEOWNERS file in canonical form.
    Fmt(FmtArgs),
    /// List the rules of the CODEOWNERS file.
    Show(ShowArgs),
}

/// Options for `fmt`.
#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FmtArgs {
    /// Only check whether the file is already formatted; exit 3 if not.
    #[arg(long)]
    pub check: bool,

    /// Do not enforce GitHub's 3 MB size limit.
    #[arg(long)]
    pub no_size_check: bool,

    /// Write the result to this path instead of rewriting in place.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Do not create missing parent directories of the output path.
    #[arg(long)]
    pub no_create_dirs: bool,
}

/// Options for `show`.
#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowArgs {
    /// Output the whole document as JSON instead of a rule listing.
    #[arg(long, short = 'j')]
    pub json: bool,
}

impl Args {
    /// Returns true if the command writes machine-readable output.
    pub fn json_output(&self) -> bool {
        matches!(&self.command, Command::Show(show) if show.json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_defaults() {
        let args = Args::parse_from(["github-codeowners", "fmt"]);
        assert_eq!(args.command, Command::Fmt(FmtArgs::default()));
        assert_eq!(args.repository_path, PathBuf::from("."));
        assert!(args.codeowners_path.is_none());
    }

    #[test]
    fn test_fmt_flags() {
        let args = Args::parse_from([
            "github-codeowners",
            "fmt",
            "--check",
            "--no-size-check",
            "-o",
            "out/CODEOWNERS",
        ]);
        let Command::Fmt(fmt) = args.command else {
            panic!("Expected fmt");
        };
        assert!(fmt.check);
        assert!(fmt.no_size_check);
        assert!(!fmt.no_create_dirs);
        assert_eq!(fmt.output, Some(PathBuf::from("out/CODEOWNERS")));
    }

    #[test]
    fn test_show_json_flag() {
        let args = Args::parse_from(["github-codeowners", "show", "--json"]);
        assert!(args.json_output());

        let args = Args::parse_from(["github-codeowners", "show", "-j"]);
        assert!(args.json_output());

        let args = Args::parse_from(["github-codeowners", "show"]);
        assert!(!args.json_output());
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args = Args::parse_from([
            "github-codeowners",
            "show",
            "--codeowners-path",
            "docs/CODEOWNERS",
            "-vv",
        ]);
        assert_eq!(args.codeowners_path, Some(PathBuf::from("docs/CODEOWNERS")));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Args::try_parse_from(["github-codeowners"]).is_err());
    }
}
