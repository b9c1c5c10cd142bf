use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::debug;

use crate::errors::errors::LoadError;

/// Immutable mapping from entry text to a fixed table index.
///
/// Indices are supplied by the table source, not generated here, and need
/// not be contiguous. The table never changes after construction; the
/// tokenizer relies on that to treat lookups as pure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstTable {
    entries: HashMap<String, usize>,
}

impl ConstTable {
    /// Builds a table from `(index, text)` pairs. Entry text must be unique.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = (usize, S)>,
        S: Into<String>,
    {
        let mut entries = HashMap::new();
        for (index, text) in pairs {
            let text = text.into();
            if entries.insert(text.clone(), index).is_some() {
                return Err(LoadError::duplicate_entry(&text));
            }
        }
        Ok(Self { entries })
    }

    /// Parses whitespace-separated `<index> <text>` pairs until end of
    /// input. Pairs may share a line or span lines; entry text is a single
    /// whitespace-delimited word, so multi-word entries are not supported.
    pub fn from_source(source: &str) -> Result<Self, LoadError> {
        let mut fields = source.split_whitespace();
        let mut pairs = Vec::new();

        while let Some(field) = fields.next() {
            let index: usize = field
                .parse()
                .map_err(|_| LoadError::invalid_index(field))?;
            let text = fields.next().ok_or(LoadError::MissingText { index })?;
            pairs.push((index, text));
        }

        Self::from_pairs(pairs)
    }

    /// Loads a table file. An unreadable file is a `LoadError::Io`; callers
    /// decide whether to abort or retry with another source.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| LoadError::io(path, source))?;
        let table = Self::from_source(&contents)?;

        debug!("loaded {} table entries from {}", table.len(), path.display());

        Ok(table)
    }

    /// Looks up the fixed index for `text`.
    pub fn find(&self, text: &str) -> Option<usize> {
        self.entries.get(text).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
