//! Serialization of CODEOWNERS documents back to text.
//!
//! The writer is the inverse of the parser: each entry becomes one line and
//! lines are joined with `\n` (no trailing newline unless
//! [`WriterConfig::trailing_newline`] is set). Output larger than
//! GitHub's 3 MB limit is rejected unless size validation is turned off.

use crate::error::{Error, Result};
use crate::model::{CodeownersFile, Entry};
use log::{debug, trace};
use std::fmt::{self, Display};
use std::fs;
use std::path::Path;

/// GitHub's CODEOWNERS size limit (3 MB).
pub const MAX_FILE_SIZE_BYTES: usize = 3 * 1024 * 1024;

/// Configuration options for the writer.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// If true, output over [`MAX_FILE_SIZE_BYTES`] is an error.
    pub validate_size: bool,
    /// If true, missing parent directories are created before writing a file.
    pub create_dirs: bool,
    /// If true, non-empty output ends with `\n`.
    ///
    /// A closing blank entry then survives a write/parse cycle.
    pub trailing_newline: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            validate_size: true,
            create_dirs: true,
            trailing_newline: false,
        }
    }
}

impl WriterConfig {
    /// Creates a writer config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the size limit is enforced.
    pub fn with_validate_size(mut self, value: bool) -> Self {
        self.validate_size = value;
        self
    }

    /// Sets whether parent directories are created.
    pub fn with_create_dirs(mut self, value: bool) -> Self {
        self.create_dirs = value;
        self
    }

    /// Sets whether non-empty output ends with a newline.
    pub fn with_trailing_newline(mut self, value: bool) -> Self {
        self.trailing_newline = value;
        self
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Blank => Ok(()),
            Entry::Comment { text } if text.is_empty() => f.write_str("#"),
            Entry::Comment { text } => write!(f, "# {}", text),
            Entry::Rule(rule) => {
                // A rule without a pattern degrades to a blank line.
                if rule.pattern.is_empty() {
                    return Ok(());
                }
                f.write_str(&rule.pattern)?;
                for owner in &rule.owners {
                    write!(f, " {}", owner)?;
                }
                match rule.comment.as_deref() {
                    Some(comment) if !comment.is_empty() => write!(f, " # {}", comment),
                    _ => Ok(()),
                }
            }
        }
    }
}

impl Display for CodeownersFile {
    /// Writes the document without enforcing the size limit.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, entry) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

/// Formats a single entry as one line of text, without a line terminator.
///
/// Entries from the parser or the checked constructors always read back as
/// the same single entry. Fields set directly on a
/// [`Rule`](crate::model::Rule) are not checked.
pub fn format_entry(entry: &Entry) -> String {
    entry.to_string()
}

/// Checks the encoded size of `content` against GitHub's limit.
pub fn validate_file_size(content: &str) -> Result<()> {
    let size_bytes = content.len();
    if size_bytes > MAX_FILE_SIZE_BYTES {
        debug!(
            "Content is {} bytes, over the {} byte limit",
            size_bytes, MAX_FILE_SIZE_BYTES
        );
        return Err(Error::size_exceeded(size_bytes, MAX_FILE_SIZE_BYTES));
    }
    Ok(())
}

/// Serializes a document with the given configuration.
pub fn write_codeowners_with_config(
    file: &CodeownersFile,
    config: &WriterConfig,
) -> Result<String> {
    let mut content = file.to_string();
    if config.trailing_newline && !file.is_empty() {
        content.push('\n');
    }
    trace!("Formatted {} entries into {} bytes", file.len(), content.len());

    if config.validate_size {
        validate_file_size(&content)?;
    }
    Ok(content)
}

/// Serializes a document, enforcing the size limit.
///
/// # Example
///
/// ```rust
/// use github_codeowners::model::CodeownersFile;
/// use github_codeowners::write::write_codeowners;
///
/// let mut file = CodeownersFile::new();
/// file.add_comment("Python files").unwrap();
/// file.add_rule("*.py", ["@python-team"], None).unwrap();
///
/// assert_eq!(write_codeowners(&file).unwrap(), "# Python files\n*.py @python-team");
/// ```
pub fn write_codeowners(file: &CodeownersFile) -> Result<String> {
    write_codeowners_with_config(file, &WriterConfig::default())
}

/// Writes a document to `path` with the given configuration.
///
/// The content is produced and size-checked before anything on disk is
/// touched, so a size failure leaves neither the file nor its directories
/// behind. An existing file is replaced entirely.
pub fn write_codeowners_file_with_config(
    file: &CodeownersFile,
    path: impl AsRef<Path>,
    config: &WriterConfig,
) -> Result<()> {
    let path = path.as_ref();
    let content = write_codeowners_with_config(file, config)?;

    if config.create_dirs {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
    }

    debug!("Writing {} bytes to {}", content.len(), path.display());
    fs::write(path, content)?;
    Ok(())
}

/// Writes a document to `path`, creating parent directories and enforcing
/// the size limit.
pub fn write_codeowners_file(file: &CodeownersFile, path: impl AsRef<Path>) -> Result<()> {
    write_codeowners_file_with_config(file, path, &WriterConfig::default())
}
