//! Output formatting for the CLI.
//!
//! This module provides human-readable and JSON output for parsed documents.

use colored::Colorize;
use github_codeowners::{CodeownersFile, OwnerKind, Rule};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// JSON output for `show --json`.
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    /// Path of the file that was read.
    pub path: String,
    /// Number of rules in the document.
    pub rules: usize,
    /// Number of rules without owners.
    pub unowned: usize,
    /// The parsed document.
    pub document: &'a CodeownersFile,
}

impl<'a> JsonOutput<'a> {
    /// Creates the JSON output for a document.
    pub fn new(path: &Path, document: &'a CodeownersFile) -> Self {
        Self {
            path: path.display().to_string(),
            rules: document.rules().count(),
            unowned: document.rules().filter(|rule| rule.is_unowned()).count(),
            document,
        }
    }

    /// Writes the JSON output to a writer.
    pub fn write<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)
    }
}

/// Output formatter for human-readable console output.
pub struct HumanOutput<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> HumanOutput<W> {
    /// Creates a new human output formatter.
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Writes a header line.
    pub fn write_header(&mut self, title: &str) -> std::io::Result<()> {
        let header = format!("==> {}", title);
        if self.use_colors {
            writeln!(self.writer, "{}", header.cyan().bold())
        } else {
            writeln!(self.writer, "{}", header)
        }
    }

    /// Writes one rule, owners colored by kind.
    pub fn write_rule(&mut self, rule: &Rule) -> std::io::Result<()> {
        if !self.use_colors {
            let owners: Vec<&str> = rule.owners.iter().map(|owner| owner.as_str()).collect();
            write!(self.writer, "  {}", rule.pattern)?;
            if owners.is_empty() {
                write!(self.writer, " (unowned)")?;
            } else {
                write!(self.writer, " {}", owners.join(" "))?;
            }
            if let Some(comment) = &rule.comment {
                write!(self.writer, " # {}", comment)?;
            }
            return writeln!(self.writer);
        }

        write!(self.writer, "  {}", rule.pattern.bold())?;
        if rule.owners.is_empty() {
            write!(self.writer, " {}", "(unowned)".yellow())?;
        }
        for owner in &rule.owners {
            let text = owner.as_str();
            let styled = match owner.kind() {
                OwnerKind::User => text.green(),
                OwnerKind::Team => text.blue(),
                OwnerKind::Email => text.magenta(),
            };
            write!(self.writer, " {}", styled)?;
        }
        if let Some(comment) = &rule.comment {
            write!(self.writer, " {}", format!("# {}", comment).dimmed())?;
        }
        writeln!(self.writer)
    }

    /// Writes a listing of every rule followed by a summary.
    pub fn write_document(
        &mut self,
        path: &Path,
        document: &CodeownersFile,
    ) -> std::io::Result<()> {
        self.write_header(&path.display().to_string())?;
        for rule in document.rules() {
            self.write_rule(rule)?;
        }
        let rules = document.rules().count();
        let unowned = document.rules().filter(|rule| rule.is_unowned()).count();
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} line(s), {} rule(s), {} unowned",
            document.len(),
            rules,
            unowned
        )
    }

    /// Writes a success message.
    pub fn write_success(&mut self, message: &str) -> std::io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "{}", message.green().bold())
        } else {
            writeln!(self.writer, "{}", message)
        }
    }

    /// Writes a startup error.
    pub fn write_error(&mut self, message: &str) -> std::io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "{} {}", "Error:".red().bold(), message)
        } else {
            writeln!(self.writer, "Error: {}", message)
        }
    }
}
