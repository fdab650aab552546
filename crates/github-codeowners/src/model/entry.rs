//! Entries: the individual lines of a CODEOWNERS document.

use super::owner::CodeOwner;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// The type of a line in a CODEOWNERS file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// An empty (or whitespace-only) line.
    Blank,
    /// A full-line `#` comment.
    Comment,
    /// A pattern with its owners.
    Rule,
}

/// An ownership rule: a pattern, its owners, and an optional inline comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// The path pattern, stored verbatim.
    ///
    /// An empty pattern is a malformed rule; it is written out as a blank line.
    pub pattern: String,
    /// Owners in the order they appear on the line. Empty for unowned rules.
    #[serde(default)]
    pub owners: Vec<CodeOwner>,
    /// Trailing `# ...` annotation, without the `#`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Rule {
    /// Creates a new rule.
    ///
    /// The pattern must be a single token that does not start with `#`, or
    /// empty for a malformed rule. The inline comment must fit on one line.
    pub fn new(
        pattern: impl Into<String>,
        owners: Vec<CodeOwner>,
        comment: Option<String>,
    ) -> Result<Self> {
        let rule = Self {
            pattern: pattern.into(),
            owners,
            comment,
        };
        rule.validate()?;
        Ok(rule)
    }

    /// Checks the fields that public construction cannot enforce.
    ///
    /// Owners are already valid by type.
    pub fn validate(&self) -> Result<()> {
        check_pattern(&self.pattern)?;
        match &self.comment {
            Some(comment) => check_single_line(comment),
            None => Ok(()),
        }
    }

    /// Returns true if the rule has no owners.
    pub fn is_unowned(&self) -> bool {
        self.owners.is_empty()
    }

    /// Returns true if the rule has no pattern and degrades to a blank line.
    pub fn is_malformed(&self) -> bool {
        self.pattern.is_empty()
    }
}

fn check_pattern(pattern: &str) -> Result<()> {
    if pattern.starts_with('#') || pattern.contains(char::is_whitespace) {
        return Err(Error::invalid_pattern(pattern));
    }
    Ok(())
}

fn check_single_line(text: &str) -> Result<()> {
    if text.contains(['\n', '\r']) {
        return Err(Error::invalid_comment(text));
    }
    Ok(())
}

/// A single line of a CODEOWNERS document.
///
/// Deserialization applies the same checks as the constructors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", try_from = "EntryRepr")]
pub enum Entry {
    /// A blank line.
    Blank,
    /// A comment line.
    Comment {
        /// The comment body, without the leading `#` and the space after it.
        text: String,
    },
    /// A rule line.
    Rule(Rule),
}

impl Entry {
    /// Creates a blank entry.
    pub fn blank() -> Self {
        Entry::Blank
    }

    /// Creates a comment entry.
    ///
    /// Fails if `text` contains a line break.
    pub fn comment(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        check_single_line(&text)?;
        Ok(Entry::Comment { text })
    }

    /// Creates a rule entry from owner strings.
    ///
    /// Fails if any owner is invalid (see [`CodeOwner::new`]) or if the
    /// pattern or inline comment would not be read back unchanged.
    pub fn rule<I, S>(
        pattern: impl Into<String>,
        owners: I,
        inline_comment: Option<&str>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let owners = owners
            .into_iter()
            .map(|owner| CodeOwner::new(owner.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Rule::new(pattern, owners, inline_comment.map(str::to_owned)).map(Entry::Rule)
    }

    /// Returns the type tag of this entry.
    pub fn entry_type(&self) -> EntryType {
        match self {
            Entry::Blank => EntryType::Blank,
            Entry::Comment { .. } => EntryType::Comment,
            Entry::Rule(_) => EntryType::Rule,
        }
    }

    /// Returns the rule payload, if this is a rule.
    pub fn as_rule(&self) -> Option<&Rule> {
        match self {
            Entry::Rule(rule) => Some(rule),
            _ => None,
        }
    }

    /// Returns the pattern of a rule entry.
    pub fn pattern(&self) -> Option<&str> {
        self.as_rule().map(|rule| rule.pattern.as_str())
    }

    /// Returns the owners of a rule entry; empty for every other entry.
    pub fn owners(&self) -> &[CodeOwner] {
        match self {
            Entry::Rule(rule) => &rule.owners,
            _ => &[],
        }
    }

    /// Returns the comment body of a comment entry, or the inline comment of a rule.
    pub fn comment_text(&self) -> Option<&str> {
        match self {
            Entry::Blank => None,
            Entry::Comment { text } => Some(text.as_str()),
            Entry::Rule(rule) => rule.comment.as_deref(),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Entry::Blank)
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, Entry::Comment { .. })
    }

    pub fn is_rule(&self) -> bool {
        matches!(self, Entry::Rule(_))
    }
}

impl From<Rule> for Entry {
    fn from(rule: Rule) -> Self {
        Entry::Rule(rule)
    }
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum EntryRepr {
    Blank,
    Comment { text: String },
    Rule(Rule),
}

impl TryFrom<EntryRepr> for Entry {
    type Error = Error;

    fn try_from(repr: EntryRepr) -> Result<Self> {
        match repr {
            EntryRepr::Blank => Ok(Entry::Blank),
            EntryRepr::Comment { text } => Entry::comment(text),
            EntryRepr::Rule(rule) => {
                rule.validate()?;
                Ok(Entry::Rule(rule))
            }
        }
    }
}
