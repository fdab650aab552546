//! Lexer and token parsers for CODEOWNERS lines.
//!
//! This module contains nom-based parsers for the pieces of a single
//! line: comment bodies, whitespace-delimited tokens, and the split of a
//! rule line into pattern, owners and trailing comment.

use nom::{
    IResult, Parser,
    bytes::complete::{take_while, take_while1},
    character::complete::char,
    combinator::{opt, rest},
    multi::many0,
    sequence::preceded,
};

fn is_separator(c: char) -> bool {
    c.is_whitespace()
}

/// Characters that can appear in a token.
fn is_token_char(c: char) -> bool {
    !is_separator(c)
}

/// Parses a complete comment line (optional whitespace + `#` + optional space + body).
///
/// Returns the body with the `#` and at most one following space removed.
pub fn parse_comment_line(input: &str) -> IResult<&str, &str> {
    (
        take_while(is_separator),
        char('#'),
        opt(char(' ')),
        rest,
    )
        .map(|(_, _, _, body)| body)
        .parse(input)
}

/// Checks if a line is blank (empty or only whitespace).
pub fn is_blank_line(input: &str) -> bool {
    input.trim().is_empty()
}

/// Parses one token, skipping any whitespace run before it.
fn token(input: &str) -> IResult<&str, &str> {
    preceded(take_while(is_separator), take_while1(is_token_char)).parse(input)
}

/// Splits a line into its whitespace-delimited tokens.
///
/// Runs of whitespace of any length act as a single separator.
pub fn tokenize(input: &str) -> IResult<&str, Vec<&str>> {
    many0(token).parse(input)
}

/// Result of splitting a rule line into its components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleComponents<'a> {
    /// The pattern text.
    pub pattern: &'a str,
    /// Owner tokens, in order.
    pub owners: Vec<&'a str>,
    /// The trailing comment body, if any.
    pub comment: Option<String>,
}

/// Parses a rule line into pattern, owners and trailing comment.
///
/// The first token is the pattern. The first later token starting with `#`
/// opens the trailing comment, which runs to the end of the line.
pub fn parse_rule_components(input: &str) -> IResult<&str, RuleComponents<'_>> {
    let (remaining, tokens) = tokenize(input)?;

    let Some((&pattern, rest)) = tokens.split_first() else {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Many1,
        )));
    };

    let comment_start = rest
        .iter()
        .position(|token| token.starts_with('#'))
        .unwrap_or(rest.len());
    let (owners, comment_tokens) = rest.split_at(comment_start);

    Ok((
        remaining,
        RuleComponents {
            pattern,
            owners: owners.to_vec(),
            comment: join_comment(comment_tokens),
        },
    ))
}

/// Rejoins comment tokens and strips the `#` marker and one following space.
///
/// An empty body yields `None`.
fn join_comment(tokens: &[&str]) -> Option<String> {
    if tokens.is_empty() {
        return None;
    }
    let joined = tokens.join(" ");
    let body = joined.strip_prefix('#').unwrap_or(&joined);
    let body = body.strip_prefix(' ').unwrap_or(body);
    if body.is_empty() {
        None
    } else {
        Some(body.to_owned())
    }
}
