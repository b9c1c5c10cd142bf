//! Utility macros for the scanner.
//!
//! This module defines helper macros used throughout the crate:
//!
//! - `MK_TABLE!` - Builds a ConstTable from index/text literals
//!
//! These macros reduce boilerplate when declaring fixed tables.

/// Builds a `ConstTable` from `index => text` literals.
///
/// The entries must be unique; a duplicate makes construction fail, which
/// for a literal table is a programming error.
///
/// # Example
///
/// ```ignore
/// let operations = MK_TABLE!(0 => "=", 1 => "==");
/// ```
#[macro_export]
macro_rules! MK_TABLE {
    ($($index:expr => $text:expr),* $(,)?) => {
        $crate::tables::const_table::ConstTable::from_pairs([$(($index, $text)),*])
            .expect("table literal entries are unique")
    };
}
