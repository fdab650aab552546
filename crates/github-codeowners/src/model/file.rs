//! The document container.

use super::entry::{Entry, Rule};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A CODEOWNERS document: its entries in literal line order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeownersFile {
    entries: Vec<Entry>,
}

impl CodeownersFile {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a document from entries already in line order.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Appends an entry and returns a reference to it.
    pub fn push(&mut self, entry: Entry) -> &Entry {
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    /// Appends a blank line.
    pub fn add_blank(&mut self) -> &Entry {
        self.push(Entry::blank())
    }

    /// Appends a comment line.
    ///
    /// Nothing is appended if `text` contains a line break.
    pub fn add_comment(&mut self, text: impl Into<String>) -> Result<&Entry> {
        let entry = Entry::comment(text)?;
        Ok(self.push(entry))
    }

    /// Appends a rule line.
    ///
    /// Nothing is appended if the pattern, an owner or the inline comment
    /// is invalid.
    pub fn add_rule<I, S>(
        &mut self,
        pattern: impl Into<String>,
        owners: I,
        inline_comment: Option<&str>,
    ) -> Result<&Entry>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entry = Entry::rule(pattern, owners, inline_comment)?;
        Ok(self.push(entry))
    }

    /// Returns all entries in order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns an iterator over all entries.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Returns an iterator over the rules, in file order.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.entries.iter().filter_map(Entry::as_rule)
    }

    /// Number of entries (lines).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the document, returning its entries.
    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }
}

impl FromIterator<Entry> for CodeownersFile {
    fn from_iter<T: IntoIterator<Item = Entry>>(iter: T) -> Self {
        Self::from_entries(iter.into_iter().collect())
    }
}

impl Extend<Entry> for CodeownersFile {
    fn extend<T: IntoIterator<Item = Entry>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}

impl IntoIterator for CodeownersFile {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a CodeownersFile {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
