//! Line and file-level parsers for CODEOWNERS files.
//!
//! This module combines the lexer components to parse complete lines
//! and entire CODEOWNERS files.

use super::lexer::{is_blank_line, parse_comment_line, parse_rule_components};
use crate::error::Result;
use crate::model::{CodeOwner, CodeownersFile, Entry, Rule};
use log::{debug, trace};
use std::fs;
use std::path::Path;

/// Parses a single line of a CODEOWNERS file.
///
/// Every line maps to exactly one entry; this never fails.
fn parse_line(line_text: &str) -> Entry {
    let line_text = line_text.trim_end();

    if is_blank_line(line_text) {
        return Entry::blank();
    }

    // Built directly: a single line cannot hold a line break.
    if let Ok((_, body)) = parse_comment_line(line_text) {
        return Entry::Comment {
            text: body.to_owned(),
        };
    }

    match parse_rule_components(line_text) {
        Ok((_, components)) => {
            let owners = components
                .owners
                .iter()
                .map(|token| CodeOwner::from_token(token))
                .collect();
            Entry::Rule(Rule {
                pattern: components.pattern.to_owned(),
                owners,
                comment: components.comment,
            })
        }
        // A non-blank line always yields a pattern token.
        Err(_) => Entry::blank(),
    }
}

/// Parses CODEOWNERS text into a document, one entry per line.
///
/// Blank lines and comments are kept so the document can be written back
/// without losing layout.
///
/// # Example
///
/// ```rust
/// use github_codeowners::parse::parse_codeowners;
///
/// let file = parse_codeowners("*.html @frontend # Web pages\n\n*.md");
/// assert_eq!(file.len(), 3);
///
/// let rules: Vec<_> = file.rules().collect();
/// assert_eq!(rules[0].comment.as_deref(), Some("Web pages"));
/// assert!(rules[1].owners.is_empty());
/// ```
pub fn parse_codeowners(input: &str) -> CodeownersFile {
    debug!("Parsing CODEOWNERS content ({} bytes)", input.len());

    let file: CodeownersFile = input
        .lines()
        .enumerate()
        .map(|(idx, line_text)| {
            let entry = parse_line(line_text);
            trace!("Line {}: {:?}", idx + 1, entry.entry_type());
            entry
        })
        .collect();

    debug!(
        "Parsing complete: {} entries, {} rules",
        file.len(),
        file.rules().count()
    );
    file
}

/// Reads a CODEOWNERS file from disk and parses it.
///
/// The file must be valid UTF-8. IO failures are returned unchanged as
/// [`Error::Io`](crate::Error::Io).
pub fn parse_codeowners_file(path: impl AsRef<Path>) -> Result<CodeownersFile> {
    let path = path.as_ref();
    debug!("Reading CODEOWNERS file {}", path.display());
    let content = fs::read_to_string(path)?;
    Ok(parse_codeowners(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::model::EntryType;

    fn types(file: &CodeownersFile) -> Vec<EntryType> {
        file.iter().map(Entry::entry_type).collect()
    }

    fn comment(text: &str) -> Entry {
        Entry::comment(text).unwrap()
    }

    #[test]
    fn parse_empty_input() {
        let file = parse_codeowners("");
        assert!(file.is_empty());
    }

    #[test]
    fn parse_blank_lines() {
        let file = parse_codeowners("\n   \n\t\n");
        assert_eq!(file.len(), 3);
        assert!(file.iter().all(Entry::is_blank));
    }

    #[test]
    fn parse_comment() {
        let file = parse_codeowners("# This is a comment\n");
        assert_eq!(file.len(), 1);
        assert_eq!(file.entries()[0], comment("This is a comment"));
    }

    #[test]
    fn parse_comment_with_leading_whitespace() {
        let file = parse_codeowners("    # indented comment");
        assert_eq!(file.entries()[0], comment("indented comment"));
    }

    #[test]
    fn parse_bare_hash_comment() {
        let file = parse_codeowners("#");
        assert_eq!(file.entries()[0], comment(""));
    }

    #[test]
    fn parse_comment_trailing_whitespace_trimmed() {
        let file = parse_codeowners("# note   \t");
        assert_eq!(file.entries()[0], comment("note"));
    }

    #[test]
    fn parse_keeps_blank_line_before_final_newline() {
        // Only the last line terminator is dropped by line splitting.
        let file = parse_codeowners("* @a\n\n");
        assert_eq!(types(&file), vec![EntryType::Rule, EntryType::Blank]);

        let file = parse_codeowners("* @a\n");
        assert_eq!(types(&file), vec![EntryType::Rule]);
    }

    #[test]
    fn parse_blank_line_between_rules() {
        let file = parse_codeowners("*.py @a\n\n*.js @b");
        assert_eq!(
            types(&file),
            vec![EntryType::Rule, EntryType::Blank, EntryType::Rule]
        );
    }

    #[test]
    fn parse_rule_with_inline_comment() {
        let file = parse_codeowners("*.html @frontend # Web pages");
        let rule = file.rules().next().unwrap();
        assert_eq!(rule.pattern, "*.html");
        assert_eq!(rule.owners.len(), 1);
        assert_eq!(rule.owners[0].as_str(), "@frontend");
        assert_eq!(rule.comment.as_deref(), Some("Web pages"));
    }

    #[test]
    fn parse_unowned_rule() {
        let file = parse_codeowners("*.md");
        let rule = file.rules().next().unwrap();
        assert_eq!(rule.pattern, "*.md");
        assert!(rule.owners.is_empty());
        assert_eq!(rule.comment, None);
    }

    #[test]
    fn parse_unowned_rule_with_comment() {
        let file = parse_codeowners("/vendor/ # nobody");
        let rule = file.rules().next().unwrap();
        assert!(rule.is_unowned());
        assert_eq!(rule.comment.as_deref(), Some("nobody"));
    }

    #[test]
    fn parse_rule_with_leading_whitespace() {
        let file = parse_codeowners("   /docs/   @docs-team");
        let rule = file.rules().next().unwrap();
        assert_eq!(rule.pattern, "/docs/");
        assert_eq!(rule.owners[0].as_str(), "@docs-team");
    }

    #[test]
    fn parse_owner_kinds() {
        let file = parse_codeowners("docs/** @docs-team @org/writers docs@example.com");
        let rule = file.rules().next().unwrap();
        assert!(rule.owners[0].is_user());
        assert!(rule.owners[1].is_team());
        assert!(rule.owners[2].is_email());
    }

    #[test]
    fn parse_crlf_line_endings() {
        let file = parse_codeowners("*.rs @a\r\n\r\n# c\r\n");
        assert_eq!(
            types(&file),
            vec![EntryType::Rule, EntryType::Blank, EntryType::Comment]
        );
        assert_eq!(file.entries()[2], comment("c"));
    }

    #[test]
    fn parse_file_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CODEOWNERS");
        fs::write(&path, "# Owners\n* @default-owner\n").unwrap();

        let file = parse_codeowners_file(&path).unwrap();
        assert_eq!(file.len(), 2);
        assert_eq!(file.rules().count(), 1);
    }

    #[test]
    fn parse_file_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = parse_codeowners_file(dir.path().join("missing"));
        assert!(
            matches!(result, Err(Error::Io(ref e)) if e.kind() == std::io::ErrorKind::NotFound)
        );
    }

    #[test]
    fn parse_file_invalid_utf8_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CODEOWNERS");
        fs::write(&path, [0x2a, 0x20, 0xff, 0xfe]).unwrap();

        let result = parse_codeowners_file(&path);
        assert!(
            matches!(result, Err(Error::Io(ref e)) if e.kind() == std::io::ErrorKind::InvalidData)
        );
    }
}
