use lazy_static::lazy_static;

use super::const_table::ConstTable;
use crate::MK_TABLE;

lazy_static! {
    /// Keyword table for the demo language.
    pub static ref DEFAULT_KEYWORDS: ConstTable = MK_TABLE!(
        0 => "int",
        1 => "if",
        2 => "else",
        3 => "while",
        4 => "for",
        5 => "read",
        6 => "write",
    );

    /// Splitter table: separators and brackets.
    pub static ref DEFAULT_SPLITTERS: ConstTable = MK_TABLE!(
        0 => ",",
        1 => ";",
        2 => "(",
        3 => ")",
        4 => "{",
        5 => "}",
    );

    /// Operation table, including both one and two character operators.
    pub static ref DEFAULT_OPERATIONS: ConstTable = MK_TABLE!(
        0 => "=",
        1 => "==",
        2 => "!=",
        3 => "+",
        4 => "-",
        5 => "*",
        6 => "<",
    );
}
