//! Declarative token extraction for semi-structured text sources.
//!
//! Every text source (`/proc/stat`, `/proc/net/wireless`, `amixer` output)
//! is described as an ordered list of [`Field`]s. [`extract`] walks the text
//! once: for each field it finds the label after the previous match,
//! optionally consumes a separator, and pulls out the token(s) the field
//! asks for. Any field that cannot be found or does not have the expected
//! shape fails the whole extraction, so callers never see tokens from the
//! wrong column.

use crate::error::{BarError, Result};

/// What to take after a field's label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// The next token
    Token,
    /// Skip `n` tokens, then take one
    Nth(usize),
    /// The next `n` tokens
    Columns(usize),
}

#[derive(Debug, Clone, Copy)]
pub struct Field<'l> {
    pub label: &'l str,
    pub kind: FieldKind,
}

impl<'l> Field<'l> {
    pub const fn new(label: &'l str, kind: FieldKind) -> Self {
        Self { label, kind }
    }

    pub const fn token(label: &'l str) -> Self {
        Self::new(label, FieldKind::Token)
    }

    /// Number of tokens this field contributes to the extraction result
    fn width(&self) -> usize {
        match self.kind {
            FieldKind::Columns(n) => n,
            _ => 1,
        }
    }
}

/// Lexical rules shared by all fields of one source
#[derive(Debug, Clone, Copy)]
pub struct Syntax<'d> {
    /// Character consumed right after each label, if any (`:` for `key: value`)
    pub separator: Option<char>,
    /// Characters that separate tokens
    pub delimiters: &'d str,
}

impl Syntax<'_> {
    fn is_delimiter(&self, c: char) -> bool {
        self.delimiters.contains(c)
    }

    /// Tokens stop at the end of a line unless newline is itself a delimiter
    fn crosses_lines(&self) -> bool {
        self.delimiters.contains('\n')
    }
}

/// Extract every field, in order, from `text`.
///
/// The result holds one slice per token (a `Columns(n)` field contributes
/// `n` entries) and borrows from `text`.
pub fn extract<'a>(text: &'a str, fields: &[Field<'_>], syntax: Syntax<'_>) -> Result<Vec<&'a str>> {
    let mut tokens = Vec::with_capacity(fields.iter().map(Field::width).sum());
    let mut pos = 0;

    for field in fields {
        pos = seek_label(text, pos, field.label)?;

        if let Some(separator) = syntax.separator {
            pos = seek_past(text, pos, separator)
                .ok_or_else(|| BarError::parse(format!("no '{}' after `{}`", separator, field.label)))?;
        }

        match field.kind {
            FieldKind::Token => tokens.push(next_token(text, &mut pos, syntax, field.label)?),
            FieldKind::Nth(skip) => {
                for _ in 0..skip {
                    next_token(text, &mut pos, syntax, field.label)?;
                }
                tokens.push(next_token(text, &mut pos, syntax, field.label)?);
            }
            FieldKind::Columns(count) => {
                for _ in 0..count {
                    tokens.push(next_token(text, &mut pos, syntax, field.label)?);
                }
            }
        }
    }

    Ok(tokens)
}

/// Parse a numeric token, naming the field in the error
pub fn parse_number<T: std::str::FromStr>(token: &str, what: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| BarError::parse(format!("{} is not a number: {:?}", what, token)))
}

fn seek_label(text: &str, from: usize, label: &str) -> Result<usize> {
    text[from..]
        .find(label)
        .map(|idx| from + idx + label.len())
        .ok_or_else(|| BarError::parse(format!("field `{}` not found", label)))
}

fn seek_past(text: &str, from: usize, c: char) -> Option<usize> {
    text[from..].find(c).map(|idx| from + idx + c.len_utf8())
}

fn next_token<'a>(text: &'a str, pos: &mut usize, syntax: Syntax<'_>, label: &str) -> Result<&'a str> {
    let rest = &text[*pos..];
    let mut start = None;

    for (idx, c) in rest.char_indices() {
        if c == '\n' && !syntax.crosses_lines() {
            break;
        }
        if !syntax.is_delimiter(c) {
            start = Some(idx);
            break;
        }
    }

    let start = start.ok_or_else(|| BarError::parse(format!("missing value for `{}`", label)))?;
    let len = rest[start..]
        .char_indices()
        .find(|&(_, c)| c == '\n' || syntax.is_delimiter(c))
        .map(|(idx, _)| idx)
        .unwrap_or(rest.len() - start);

    let token = &rest[start..start + len];
    *pos += start + len;
    Ok(token)
}
