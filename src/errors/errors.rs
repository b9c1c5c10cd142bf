use std::fmt::Display;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while constructing a constant table from an external source.
///
/// Any of these is fatal at startup: the tokenizer never runs against a
/// table that did not load completely.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read table file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid table index {value:?}: expected an unsigned integer")]
    InvalidIndex { value: String },
    #[error("table index {index} has no entry text")]
    MissingText { index: usize },
    #[error("duplicate table entry {text:?}")]
    DuplicateEntry { text: String },
}

impl LoadError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_index(value: &str) -> Self {
        Self::InvalidIndex {
            value: value.to_string(),
        }
    }

    pub fn duplicate_entry(text: &str) -> Self {
        Self::DuplicateEntry {
            text: text.to_string(),
        }
    }
}

/// A single malformed lexeme, recorded with 1-based line and column.
///
/// The column points at the character the automaton rejected, which for a
/// multi-character lexeme is the lookahead position, not the lexeme start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid character at ({line}, {column})")]
pub struct LexError {
    pub line: usize,
    pub column: usize,
}

impl LexError {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Every lexical error found in one tokenization run, in input order.
///
/// Records are only appended, never dropped. A non-empty report fails the
/// whole call, so callers get either the complete token sequence or the
/// complete report, never a mix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexReport {
    errors: Vec<LexError>,
}

impl LexReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, error: LexError) {
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Display for LexReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for error in &self.errors {
            writeln!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for LexReport {}
