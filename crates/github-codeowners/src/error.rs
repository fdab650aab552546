//! Error types for reading and writing CODEOWNERS files.

use thiserror::Error;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

fn as_mb(bytes: &usize) -> f64 {
    *bytes as f64 / BYTES_PER_MB
}

/// An error raised by the CODEOWNERS parser or writer.
#[derive(Debug, Error)]
pub enum Error {
    /// The serialized document is larger than GitHub accepts.
    #[error(
        "CODEOWNERS file size ({:.2} MB) exceeds GitHub's {} MB limit. \
         The file must be under {} MB to be processed by GitHub.",
        as_mb(.size_bytes),
        as_mb(.limit_bytes),
        as_mb(.limit_bytes)
    )]
    SizeExceeded {
        /// Size of the encoded document in bytes.
        size_bytes: usize,
        /// The limit that was exceeded, in bytes.
        limit_bytes: usize,
    },

    /// An owner string was empty, contained whitespace or started with `#`.
    #[error(
        "invalid owner {owner:?}: owners must be a non-empty token without whitespace \
         that does not start with '#'"
    )]
    InvalidOwner {
        /// The rejected text.
        owner: String,
    },

    /// A rule pattern would not be read back as the same single token.
    #[error(
        "invalid pattern {pattern:?}: patterns must not contain whitespace or start with '#'"
    )]
    InvalidPattern {
        /// The rejected pattern.
        pattern: String,
    },

    /// Comment text spanning more than one line.
    #[error("invalid comment {comment:?}: comments must not contain line breaks")]
    InvalidComment {
        /// The rejected text.
        comment: String,
    },

    /// Reading or writing the file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a size exceeded error.
    pub fn size_exceeded(size_bytes: usize, limit_bytes: usize) -> Self {
        Self::SizeExceeded {
            size_bytes,
            limit_bytes,
        }
    }

    /// Creates an invalid owner error.
    pub fn invalid_owner(owner: impl Into<String>) -> Self {
        Self::InvalidOwner {
            owner: owner.into(),
        }
    }

    /// Creates an invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
        }
    }

    /// Creates an invalid comment error.
    pub fn invalid_comment(comment: impl Into<String>) -> Self {
        Self::InvalidComment {
            comment: comment.into(),
        }
    }

    /// Returns the offending size in MiB for [`Error::SizeExceeded`].
    pub fn size_mb(&self) -> Option<f64> {
        match self {
            Error::SizeExceeded { size_bytes, .. } => Some(as_mb(size_bytes)),
            _ => None,
        }
    }

    /// Returns the limit in MiB for [`Error::SizeExceeded`].
    pub fn limit_mb(&self) -> Option<f64> {
        match self {
            Error::SizeExceeded { limit_bytes, .. } => Some(as_mb(limit_bytes)),
            _ => None,
        }
    }

    /// Returns true if this is a size limit violation.
    pub fn is_size_exceeded(&self) -> bool {
        matches!(self, Error::SizeExceeded { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
