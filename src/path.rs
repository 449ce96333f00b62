//! Field paths into nested facts.
//!
//! A path selects one value out of a fact document: `.`-separated
//! segments, each a field name with an optional array index. The index
//! may be bracketed (`items[2]`) or a bare digit run on the end of the
//! segment (`items2`); both select `fact["items"][2]`. Paths are parsed
//! once, when rules are built, and resolved on every evaluation.

use std::fmt;

use serde_json::Value;
use thiserror::Error;
use winnow::combinator::{alt, cut_err, delimited, opt, separated};
use winnow::error::{ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::take_while;

/// Errors produced when parsing a path string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The path string was empty.
    #[error("empty path")]
    Empty,
    /// The path string did not match the grammar.
    #[error("invalid path '{path}' at offset {offset}")]
    Invalid { path: String, offset: usize },
}

/// One step of a path: a field name and an optional array index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    field: String,
    index: Option<usize>,
}

impl Segment {
    /// The field name looked up in the enclosing object.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The array index applied after the field lookup, if any.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.index
    }
}

/// A parsed field path.
///
/// Parsing happens up front so that evaluation never re-tokenizes the
/// path string and malformed paths are rejected before any fact is seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    /// Parse a path string.
    ///
    /// # Errors
    ///
    /// Returns [`PathError`] if the input is empty or does not match the
    /// path grammar (for example a segment with no field name, digits in
    /// the middle of a field name, or an unclosed bracket).
    pub fn parse(input: &str) -> Result<Self, PathError> {
        if input.is_empty() {
            return Err(PathError::Empty);
        }
        path.parse(input)
            .map(|segments| Self { segments })
            .map_err(|e| PathError::Invalid {
                path: input.to_owned(),
                offset: e.offset(),
            })
    }

    /// The parsed segments, in traversal order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Walk the path through `fact`, yielding the value it selects.
    ///
    /// Traversal is safe-navigation: a missing key, an out-of-bounds
    /// index, a step through a non-object/non-array, or a `null` at any
    /// point yields `None` rather than an error. A `null` leaf also
    /// resolves to `None`, so operators only ever see present values.
    #[must_use]
    pub fn resolve<'a>(&self, fact: &'a Value) -> Option<&'a Value> {
        let mut current = fact;
        for segment in &self.segments {
            current = current.get(segment.field.as_str())?;
            if let Some(index) = segment.index {
                current = current.get(index)?;
            }
        }
        if current.is_null() {
            None
        } else {
            Some(current)
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(&segment.field)?;
            if let Some(index) = segment.index {
                write!(f, "[{index}]")?;
            }
        }
        Ok(())
    }
}

// -- Grammar ----------------------------------------------------------------

fn field_name<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| {
        c != '.' && c != '[' && c != ']' && !c.is_ascii_digit()
    })
    .context(StrContext::Expected(StrContextValue::Description(
        "field name",
    )))
    .parse_next(input)
}

fn digits(input: &mut &str) -> ModalResult<usize> {
    take_while(1.., |c: char| c.is_ascii_digit())
        .try_map(str::parse)
        .parse_next(input)
}

fn bracketed_index(input: &mut &str) -> ModalResult<usize> {
    delimited(
        '[',
        cut_err(digits).context(StrContext::Expected(StrContextValue::Description(
            "array index",
        ))),
        cut_err(']'),
    )
    .parse_next(input)
}

fn segment(input: &mut &str) -> ModalResult<Segment> {
    let field = field_name.parse_next(input)?;
    let index = opt(alt((bracketed_index, digits))).parse_next(input)?;
    Ok(Segment {
        field: field.to_owned(),
        index,
    })
}

fn path(input: &mut &str) -> ModalResult<Vec<Segment>> {
    separated(1.., segment, '.').parse_next(input)
}
