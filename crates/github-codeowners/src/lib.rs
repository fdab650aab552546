//! GitHub CODEOWNERS
//!
//! A library for reading, editing and writing GitHub CODEOWNERS files.
//!
//! # Features
//!
//! - **Parser**: Turn CODEOWNERS text into a document, keeping blank lines,
//!   comments and inline annotations
//! - **Writer**: Turn a document back into text, enforcing GitHub's 3 MB limit
//! - **Model**: Build and inspect documents programmatically
//!
//! # Quick Start
//!
//! ```rust
//! use github_codeowners::{parse_codeowners, write_codeowners};
//!
//! let input = "# CODEOWNERS file\n*.rs @rustacean\n\n/docs/ @github/docs-team # Docs";
//!
//! let mut file = parse_codeowners(input);
//! for rule in file.rules() {
//!     println!("Pattern: {} -> {:?}", rule.pattern, rule.owners);
//! }
//!
//! file.add_rule("*.md", ["docs@example.com"], None).unwrap();
//!
//! let output = write_codeowners(&file).unwrap();
//! assert!(output.ends_with("*.md docs@example.com"));
//! ```
//!
//! # Modules
//!
//! - [`model`]: Document, entry and owner types
//! - [`parse`]: Parser for CODEOWNERS files
//! - [`write`]: Writer for CODEOWNERS files

use std::path::{Path, PathBuf};

mod error;
#[cfg(feature = "generate")]
pub mod generate;
pub mod model;
pub mod parse;
pub mod write;

// Re-export commonly used types at the crate root
pub use error::{Error, Result};
pub use model::{CodeOwner, CodeownersFile, Entry, EntryType, OwnerKind, Rule};
pub use parse::{parse_codeowners, parse_codeowners_file};
pub use write::{
    MAX_FILE_SIZE_BYTES, WriterConfig, format_entry, write_codeowners, write_codeowners_file,
    write_codeowners_file_with_config, write_codeowners_with_config,
};

/// Locations GitHub checks for a CODEOWNERS file, relative to the
/// repository root, in lookup order.
pub const CODEOWNERS_LOCATIONS: [&str; 3] = [".github/CODEOWNERS", "CODEOWNERS", "docs/CODEOWNERS"];

/// Finds the CODEOWNERS file in a repository.
///
/// Returns the first of [`CODEOWNERS_LOCATIONS`] that exists as a file.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use github_codeowners::{find_codeowners_file, parse_codeowners_file};
///
/// if let Some(path) = find_codeowners_file(Path::new("/path/to/repo")) {
///     let file = parse_codeowners_file(&path).unwrap();
///     println!("{}: {} rules", path.display(), file.rules().count());
/// }
/// ```
pub fn find_codeowners_file(repo_path: &Path) -> Option<PathBuf> {
    CODEOWNERS_LOCATIONS
        .iter()
        .map(|location| repo_path.join(location))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn find_prefers_github_directory() {
        let repo = tempfile::tempdir().unwrap();
        fs::create_dir_all(repo.path().join(".github")).unwrap();
        fs::write(repo.path().join(".github/CODEOWNERS"), "* @a").unwrap();
        fs::write(repo.path().join("CODEOWNERS"), "* @b").unwrap();

        assert_eq!(
            find_codeowners_file(repo.path()),
            Some(repo.path().join(".github/CODEOWNERS"))
        );
    }

    #[test]
    fn find_falls_back_to_docs() {
        let repo = tempfile::tempdir().unwrap();
        fs::create_dir_all(repo.path().join("docs")).unwrap();
        fs::write(repo.path().join("docs/CODEOWNERS"), "* @a").unwrap();

        assert_eq!(
            find_codeowners_file(repo.path()),
            Some(repo.path().join("docs/CODEOWNERS"))
        );
    }

    #[test]
    fn find_ignores_directories_and_missing_files() {
        let repo = tempfile::tempdir().unwrap();
        fs::create_dir_all(repo.path().join("CODEOWNERS")).unwrap();
        assert_eq!(find_codeowners_file(repo.path()), None);
    }
}
