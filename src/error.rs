//! Errors reported by [strict](crate::ParseMode::Strict) parsing.

use objtext_common::NumberError;

use crate::Directive;

/// The reason a single line could not be read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineErrorKind {
    #[error("`{directive}` expects {expected} components, found {found}")]
    ComponentCount {
        directive: Directive,
        expected: &'static str,
        found: usize,
    },
    #[error(transparent)]
    Number(#[from] NumberError),
    #[error("index {0} is out of range for the index type")]
    IndexOutOfRange(i64),
    #[error("face vertex {0:?} has no vertex index")]
    MissingVertex(String),
    #[error("face vertex {0:?} has more than three slots")]
    TooManySlots(String),
    #[error("face has no vertices")]
    EmptyFace,
}

/// A malformed line, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct LineError {
    pub line: usize,
    pub kind: LineErrorKind,
}

/// Errors from [Parser](crate::Parser).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    Decode { valid_up_to: usize },
    #[error("{}", join_lines(.0))]
    Malformed(Vec<LineError>),
}

impl ParseError {
    /// The malformed lines behind this error; empty for decoding errors.
    pub fn lines(&self) -> &[LineError] {
        match self {
            ParseError::Decode { .. } => &[],
            ParseError::Malformed(lines) => lines,
        }
    }
}

fn join_lines(lines: &[LineError]) -> String {
    let mut res = format!("{} malformed line(s)", lines.len());
    for line in lines {
        res.push_str("; ");
        res.push_str(&line.to_string());
    }
    res
}
