//! The character categories and state machine behind the tokenizer.
//!
//! The transition matrix is an explicit state-by-category array rather than
//! ad hoc branching, so the automaton's behavior can be audited cell by
//! cell and extending it stays a local change.

/// The thirteen input character categories. Discriminants index the columns
/// of `TRANSITIONS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharCategory {
    Letter = 0,
    Digit,
    Separator,
    Bracket,
    Equals,
    Bang,
    Plus,
    Minus,
    Star,
    Less,
    Space,
    Newline,
    Other,
}

pub const CATEGORY_COUNT: usize = 13;

/// Maps one input character to its category.
///
/// Total function: anything not listed below is `Other`, which the
/// automaton rejects from every state.
pub fn classify(ch: char) -> CharCategory {
    match ch {
        'a'..='z' | 'A'..='Z' => CharCategory::Letter,
        '0'..='9' => CharCategory::Digit,
        ',' | ';' => CharCategory::Separator,
        '(' | ')' | '{' | '}' => CharCategory::Bracket,
        '=' => CharCategory::Equals,
        '!' => CharCategory::Bang,
        '+' => CharCategory::Plus,
        '-' => CharCategory::Minus,
        '*' => CharCategory::Star,
        '<' => CharCategory::Less,
        ' ' => CharCategory::Space,
        '\n' => CharCategory::Newline,
        _ => CharCategory::Other,
    }
}

/// Automaton states. `Initial` starts every lexeme run; `EndSuccess` and
/// `EndError` are the only terminals. Discriminants index the rows of
/// `TRANSITIONS`, so the scanning states must stay ahead of the terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Initial = 0,
    Int,
    Word,
    Keyword,
    OpEq,
    OpEqEq,
    OpNe,
    OpNeEq,
    OpOther,
    Split,
    Whitespace,
    OpMinus,
    EndSuccess,
    EndError,
}

const SCANNING_STATE_COUNT: usize = 12;

impl State {
    pub fn is_terminal(self) -> bool {
        matches!(self, State::EndSuccess | State::EndError)
    }

    /// Next state after seeing one character of the given category.
    ///
    /// Only meaningful for scanning states; terminals have no outgoing
    /// transitions.
    pub fn next(self, category: CharCategory) -> State {
        debug_assert!(!self.is_terminal());
        TRANSITIONS[self as usize][category as usize]
    }
}

use State::*;

/// One row per scanning state, one column per character category, in
/// declaration order. `Keyword` is a resolution state: the engine resolves
/// it without consuming input, so its row only matters for the `Other`
/// column.
#[rustfmt::skip]
const TRANSITIONS: [[State; CATEGORY_COUNT]; SCANNING_STATE_COUNT] = [
    // Letter      Digit       Separator   Bracket     =           !           +           -           *           <           Space       Newline     Other
    [Word,         Int,        Split,      Split,      OpEq,       OpNe,       OpOther,    OpMinus,    OpOther,    OpOther,    Whitespace, EndSuccess, EndError], // Initial
    [EndError,     Int,        EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndError], // Int
    [Word,         Word,       Keyword,    Keyword,    Keyword,    Keyword,    Keyword,    Keyword,    Keyword,    Keyword,    Keyword,    Keyword,    EndError], // Word
    [EndSuccess,   EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndError], // Keyword
    [EndSuccess,   EndSuccess, EndSuccess, EndSuccess, OpEqEq,     EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndError], // OpEq
    [EndSuccess,   EndSuccess, EndSuccess, EndSuccess, EndError,   EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndError], // OpEqEq
    [EndError,     EndError,   EndError,   EndError,   OpNeEq,     EndError,   EndError,   EndError,   EndError,   EndError,   EndError,   EndError,   EndError], // OpNe
    [EndSuccess,   EndSuccess, EndSuccess, EndSuccess, EndError,   EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndError], // OpNeEq
    [EndSuccess,   EndSuccess, EndError,   EndSuccess, EndError,   EndError,   EndError,   EndError,   EndError,   EndError,   EndSuccess, EndSuccess, EndError], // OpOther
    [EndSuccess,   EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndError], // Split
    [EndSuccess,   EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndSuccess, EndSuccess, Whitespace, EndSuccess, EndError], // Whitespace
    [EndSuccess,   Int,        EndError,   EndSuccess, EndError,   EndError,   EndError,   EndError,   EndError,   EndError,   EndSuccess, EndSuccess, EndError], // OpMinus
];
