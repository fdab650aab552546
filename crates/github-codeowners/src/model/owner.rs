//! Owner identifiers and their classification.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// The kind of identity an owner string refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnerKind {
    /// A GitHub user (`@username`).
    User,
    /// A GitHub team (`@org/team-name`).
    Team,
    /// An email address (`user@example.com`).
    Email,
}

impl Display for OwnerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OwnerKind::User => "user",
            OwnerKind::Team => "team",
            OwnerKind::Email => "email",
        })
    }
}

/// Classifies an owner string.
///
/// Strings that fit none of the three shapes (`@`, `@/team`, `noatsign`)
/// are reported as [`OwnerKind::User`]; no identity validation happens here.
pub fn classify_owner(text: &str) -> OwnerKind {
    if let Some(stripped) = text.strip_prefix('@') {
        return match stripped.split_once('/') {
            Some((org, team)) if !org.is_empty() && !team.is_empty() => OwnerKind::Team,
            _ => OwnerKind::User,
        };
    }

    match text.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => OwnerKind::Email,
        _ => OwnerKind::User,
    }
}

fn is_owner_token(text: &str) -> bool {
    !text.is_empty() && !text.starts_with('#') && !text.contains(char::is_whitespace)
}

/// A single ownership identifier from a CODEOWNERS rule.
///
/// The raw text is kept exactly as written; [`CodeOwner::kind`] derives the
/// classification from it on demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CodeOwner {
    raw: String,
}

impl CodeOwner {
    /// Creates an owner from its textual form.
    ///
    /// Fails if `text` is empty, contains whitespace or starts with `#`.
    /// Any of these would be read back as something other than this one
    /// owner token.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let raw = text.into();
        if !is_owner_token(&raw) {
            return Err(Error::invalid_owner(raw));
        }
        Ok(Self { raw })
    }

    /// Builds an owner from a lexer token. Tokens before the inline comment
    /// always satisfy [`CodeOwner::new`]'s checks.
    pub(crate) fn from_token(token: &str) -> Self {
        debug_assert!(is_owner_token(token));
        Self {
            raw: token.to_owned(),
        }
    }

    /// Returns the owner exactly as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the classification of this owner.
    pub fn kind(&self) -> OwnerKind {
        classify_owner(&self.raw)
    }

    pub fn is_user(&self) -> bool {
        self.kind() == OwnerKind::User
    }

    pub fn is_team(&self) -> bool {
        self.kind() == OwnerKind::Team
    }

    pub fn is_email(&self) -> bool {
        self.kind() == OwnerKind::Email
    }
}

impl Display for CodeOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for CodeOwner {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl FromStr for CodeOwner {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for CodeOwner {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CodeOwner {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<CodeOwner> for String {
    fn from(owner: CodeOwner) -> Self {
        owner.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_user() {
        assert_eq!(classify_owner("@octocat"), OwnerKind::User);
        assert_eq!(classify_owner("@user-name"), OwnerKind::User);
        assert_eq!(classify_owner("@user_123"), OwnerKind::User);
    }

    #[test]
    fn classify_team() {
        assert_eq!(classify_owner("@github/core"), OwnerKind::Team);
        assert_eq!(classify_owner("@my-org/team-name"), OwnerKind::Team);
    }

    #[test]
    fn classify_email() {
        assert_eq!(classify_owner("dev@example.com"), OwnerKind::Email);
        assert_eq!(classify_owner("user.name@company.co.uk"), OwnerKind::Email);
    }

    #[test]
    fn classify_malformed_falls_back_to_user() {
        assert_eq!(classify_owner("noatsign"), OwnerKind::User);
        assert_eq!(classify_owner("@"), OwnerKind::User);
        assert_eq!(classify_owner("@/team"), OwnerKind::User);
        assert_eq!(classify_owner("@org/"), OwnerKind::User);
        assert_eq!(classify_owner("trailing@"), OwnerKind::User);
    }

    #[test]
    fn owner_keeps_raw_text() {
        let owner = CodeOwner::new("@myorg/team-name").unwrap();
        assert_eq!(owner.as_str(), "@myorg/team-name");
        assert_eq!(owner.to_string(), "@myorg/team-name");
        assert!(owner.is_team());
        assert!(!owner.is_user());
    }

    #[test]
    fn owner_kinds() {
        assert!(CodeOwner::new("@testuser").unwrap().is_user());
        assert!(CodeOwner::new("user@example.com").unwrap().is_email());
        assert_eq!(
            "@myorg/team-name".parse::<CodeOwner>().unwrap().kind(),
            OwnerKind::Team
        );
    }

    #[test]
    fn owner_rejects_empty_and_whitespace() {
        assert!(matches!(
            CodeOwner::new(""),
            Err(Error::InvalidOwner { owner }) if owner.is_empty()
        ));
        assert!(CodeOwner::new("@two words").is_err());
        assert!(CodeOwner::new("@tab\there").is_err());
        assert!(CodeOwner::new("@line\nbreak").is_err());
    }

    #[test]
    fn owner_rejects_leading_hash() {
        assert!(matches!(
            CodeOwner::new("#team"),
            Err(Error::InvalidOwner { owner }) if owner == "#team"
        ));
        assert!(CodeOwner::new("#").is_err());
        // Only a leading `#` opens a comment.
        assert_eq!(CodeOwner::new("@a#b").unwrap().as_str(), "@a#b");
    }

    #[test]
    fn owner_serializes_as_string() {
        let owner = CodeOwner::new("@octocat").unwrap();
        assert_eq!(serde_json::to_string(&owner).unwrap(), "\"@octocat\"");

        let back: CodeOwner = serde_json::from_str("\"dev@example.com\"").unwrap();
        assert!(back.is_email());
        assert!(serde_json::from_str::<CodeOwner>("\"\"").is_err());
        assert!(serde_json::from_str::<CodeOwner>("\"#team\"").is_err());
    }

    #[test]
    fn kind_display() {
        assert_eq!(OwnerKind::User.to_string(), "user");
        assert_eq!(OwnerKind::Team.to_string(), "team");
        assert_eq!(OwnerKind::Email.to_string(), "email");
    }
}
