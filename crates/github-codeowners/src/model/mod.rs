//! In-memory representation of a CODEOWNERS document.
//!
//! A document is an ordered list of [`Entry`] values, one per line. Each
//! entry is either a blank line, a comment, or a [`Rule`] that assigns
//! [`CodeOwner`]s to a path pattern.
//!
//! # Example
//!
//! ```rust
//! use github_codeowners::model::{CodeownersFile, OwnerKind};
//!
//! let mut file = CodeownersFile::new();
//! file.add_comment("Frontend").unwrap();
//! file.add_rule("*.js", ["@myorg/frontend"], None).unwrap();
//! file.add_blank();
//!
//! let rule = file.rules().next().unwrap();
//! assert_eq!(rule.owners[0].kind(), OwnerKind::Team);
//! ```

mod entry;
mod file;
mod owner;

pub use entry::{Entry, EntryType, Rule};
pub use file::CodeownersFile;
pub use owner::{CodeOwner, OwnerKind, classify_owner};
