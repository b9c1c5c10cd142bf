use std::collections::HashMap;

/// Value classification carried in symbol metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueKind {
    #[default]
    Undefined,
    Integer,
}

/// Metadata for variable identifiers. Freshly scanned identifiers have no
/// known type or value yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VariableMeta {
    pub kind: ValueKind,
    pub value: i64,
}

/// Metadata for numeric constants; these are integers from the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantMeta {
    pub kind: ValueKind,
}

impl Default for ConstantMeta {
    fn default() -> Self {
        Self {
            kind: ValueKind::Integer,
        }
    }
}

/// Growable mapping from entry text to `(assigned index, metadata)`.
///
/// Indices are assigned 0, 1, 2, … on the first insertion of each key and
/// never change. `rows` keeps entries in assignment order, which makes the
/// reverse lookups O(1). The counter is this instance's row count; no state
/// is shared between tables.
#[derive(Debug, Clone)]
pub struct SymbolTable<M> {
    index_of: HashMap<String, usize>,
    rows: Vec<(String, M)>,
}

impl<M> SymbolTable<M> {
    pub fn new() -> Self {
        Self {
            index_of: HashMap::new(),
            rows: Vec::new(),
        }
    }

    /// Looks up the assigned index for `text`.
    pub fn find(&self, text: &str) -> Option<usize> {
        self.index_of.get(text).copied()
    }

    /// Returns the index for `text`, inserting a new entry when absent.
    ///
    /// When the key already exists its stored metadata is replaced with
    /// `meta`; the index is stable either way.
    pub fn add(&mut self, text: &str, meta: M) -> usize {
        match self.index_of.get(text) {
            Some(&index) => {
                self.rows[index].1 = meta;
                index
            }
            None => {
                let index = self.rows.len();
                self.index_of.insert(text.to_string(), index);
                self.rows.push((text.to_string(), meta));
                index
            }
        }
    }

    /// Metadata of the entry whose assigned index is `index`.
    pub fn meta_by_index(&self, index: usize) -> Option<&M> {
        self.rows.get(index).map(|(_, meta)| meta)
    }

    /// Text and metadata of the entry whose assigned index is `index`.
    pub fn entry_by_index(&self, index: usize) -> Option<(&str, &M)> {
        self.rows.get(index).map(|(text, meta)| (text.as_str(), meta))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<M> Default for SymbolTable<M> {
    fn default() -> Self {
        Self::new()
    }
}
