//! Parser module for CODEOWNERS files.
//!
//! Parsing is format-preserving: every input line becomes one entry,
//! including blank lines and comments, so a parsed document can be
//! written back with the same layout.
//!
//! # Example
//!
//! ```rust
//! use github_codeowners::parse::parse_codeowners;
//!
//! let input = r#"
//! # CODEOWNERS file
//! *.rs @rustacean
//! /docs/ @docs-team
//! "#;
//!
//! let file = parse_codeowners(input);
//! for rule in file.rules() {
//!     println!("{} -> {:?}", rule.pattern, rule.owners);
//! }
//! ```

mod lexer;
mod parser;

pub use parser::{parse_codeowners, parse_codeowners_file};

// Re-export lexer utilities that may be useful for custom parsing
pub use lexer::{RuleComponents, parse_comment_line, parse_rule_components, tokenize};
