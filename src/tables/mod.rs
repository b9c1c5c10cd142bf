//! Lookup tables consulted and populated by the tokenizer.
//!
//! Two table families exist:
//!
//! - Constant tables: read-only text-to-index maps loaded before scanning
//!   starts (keywords, splitters, operations). Their indices come from the
//!   table source and are never generated.
//! - Symbol tables: growable text-to-(index, metadata) maps filled in during
//!   scanning (numeric constants, variable identifiers). Indices are
//!   assigned on first insertion and stay stable afterwards.

pub mod const_table;
pub mod defaults;
pub mod symbol_table;
