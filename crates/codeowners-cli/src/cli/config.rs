//! Configuration handling for the CLI.
//!
//! This module turns CLI arguments into the library's configuration types
//! and resolves which CODEOWNERS file to operate on.

use crate::cli::FmtArgs;
use github_codeowners::{WriterConfig, find_codeowners_file};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// No CODEOWNERS file in any of the standard locations.
    #[error("no CODEOWNERS file found in {}", .0.display())]
    NotFound(PathBuf),

    /// Reading, parsing or writing the CODEOWNERS file failed.
    #[error(transparent)]
    Codeowners(#[from] github_codeowners::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully.
    Success = 0,
    /// Command failed (missing file, IO error, size limit).
    StartupFailure = 1,
    /// `fmt --check` found a file that is not in canonical form.
    Unformatted = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

/// Resolves the CODEOWNERS path from an explicit path or the repository root.
pub fn resolve_codeowners_path(
    repository_path: &Path,
    explicit: Option<&Path>,
) -> Result<PathBuf, CliError> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => find_codeowners_file(repository_path)
            .ok_or_else(|| CliError::NotFound(repository_path.to_path_buf())),
    }
}

impl FmtArgs {
    /// Builds the writer configuration for these options.
    ///
    /// Files written by the CLI end with a newline.
    pub fn writer_config(&self) -> WriterConfig {
        WriterConfig::new()
            .with_validate_size(!self.no_size_check)
            .with_create_dirs(!self.no_create_dirs)
            .with_trailing_newline(true)
    }
}
