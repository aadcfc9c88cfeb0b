//! Deserialization of [Meshes](crate::Mesh) from OBJ text.
//!
//! # Notes
//!
//! * Input is split into lines on `\n`; each line is trimmed of surrounding whitespace (including
//!   `\r` and a stray byte order mark) before being read.
//! * A line is recognized by its directive followed by a single space (see
//!   [Directive::classify]). All other lines are ignored, including comments and `mtllib`.
//! * Face indices are 1-based in text and 0-based in the resulting [Mesh].
//! * Negative (relative) indices aren't supported; lenient parsing treats them as absent and
//!   strict parsing rejects them.

mod decode;
mod line;

pub use decode::{decode, decode_strict};

use std::str::FromStr;

use objtext_common::{ArrayIndex, Real};

use crate::{Directive, LineError, Mesh, ParseError};
use line::LineReader;

/// How [Parser] treats malformed lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParseMode {
    /// Never fail. Malformed lines are dropped; numbers are read from the leading numeric literal
    /// of each token, and a token without one is read as NaN.
    #[default]
    Lenient,
    /// Fail on any malformed line of a recognized directive, reporting every such line.
    Strict,
}

/// Configuration for a [Parser].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ParseOptions {
    pub mode: ParseMode,
}

impl ParseOptions {
    #[inline]
    pub const fn lenient() -> Self {
        Self {
            mode: ParseMode::Lenient,
        }
    }

    #[inline]
    pub const fn strict() -> Self {
        Self {
            mode: ParseMode::Strict,
        }
    }
}

/// Reads OBJ text into [Meshes](Mesh).
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    #[inline]
    pub const fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    #[inline]
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse OBJ text.
    ///
    /// In [lenient](ParseMode::Lenient) mode, this never returns `Err`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip_all, fields(len = text.len(), mode = ?self.options.mode))
    )]
    pub fn parse_str<R: Real, Idx: ArrayIndex>(
        &self,
        text: &str,
    ) -> Result<Mesh<R, Idx>, ParseError> {
        let (mesh, errors) = self.read(text);
        match self.options.mode {
            ParseMode::Strict if !errors.is_empty() => Err(ParseError::Malformed(errors)),
            _ => Ok(mesh),
        }
    }

    /// Decode UTF-8 bytes (see [decode] & [decode_strict]), then parse the resulting text.
    pub fn parse_slice<R: Real, Idx: ArrayIndex>(
        &self,
        bytes: &[u8],
    ) -> Result<Mesh<R, Idx>, ParseError> {
        let text = match self.options.mode {
            ParseMode::Lenient => decode(bytes),
            ParseMode::Strict => decode_strict(bytes)?,
        };
        self.parse_str(&text)
    }

    /// Read every line of `text`, returning the mesh and the lines which couldn't be read.
    fn read<R: Real, Idx: ArrayIndex>(&self, text: &str) -> (Mesh<R, Idx>, Vec<LineError>) {
        let reader = LineReader {
            mode: self.options.mode,
        };
        let mut mesh = Mesh::new();
        let mut errors = Vec::new();

        for (i, line) in text.split('\n').enumerate() {
            let line = line.trim_matches(is_blank);
            let Some((directive, body)) = Directive::classify(line) else {
                continue;
            };
            if let Err(kind) = reader.read(&mut mesh, directive, body) {
                let error = LineError { line: i + 1, kind };
                trace!(%error, "dropping line");
                errors.push(error);
            }
        }

        debug!(
            vertices = mesh.vertices.len(),
            faces = mesh.faces.len(),
            dropped = errors.len(),
            "parsed OBJ text"
        );

        (mesh, errors)
    }
}

/// Characters trimmed from either end of a line.
#[inline]
fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Parse OBJ text, dropping malformed lines.
pub fn from_str<R: Real, Idx: ArrayIndex>(text: &str) -> Mesh<R, Idx> {
    Parser::new(ParseOptions::lenient()).read(text).0
}

/// Decode UTF-8 bytes (replacing malformed sequences), then parse them as OBJ text, dropping
/// malformed lines.
pub fn from_slice<R: Real, Idx: ArrayIndex>(bytes: &[u8]) -> Mesh<R, Idx> {
    from_str(&decode(bytes))
}

/// Strict parsing; see [ParseMode::Strict].
impl<R: Real, Idx: ArrayIndex> FromStr for Mesh<R, Idx> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::new(ParseOptions::strict()).parse_str(s)
    }
}
