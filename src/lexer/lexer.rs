use log::debug;

use crate::errors::errors::{LexError, LexReport};
use crate::tables::const_table::ConstTable;
use crate::tables::symbol_table::{ConstantMeta, SymbolTable, VariableMeta};

use super::automaton::{classify, State};
use super::tokens::{TableId, Token};

/// Outcome of a lexeme run that reached `EndSuccess`.
enum Resolution {
    Accept(Token),
    Discard,
    Reject,
}

/// Drives the automaton over source text.
///
/// The three constant tables are read-only for the tokenizer's lifetime;
/// the two symbol tables grow exclusively through the `&mut` borrows held
/// here, which is the exclusive-access discipline the tables require.
pub struct Tokenizer<'t> {
    keywords: &'t ConstTable,
    splitters: &'t ConstTable,
    operations: &'t ConstTable,
    constants: &'t mut SymbolTable<ConstantMeta>,
    variables: &'t mut SymbolTable<VariableMeta>,
}

impl<'t> Tokenizer<'t> {
    pub fn new(
        keywords: &'t ConstTable,
        splitters: &'t ConstTable,
        operations: &'t ConstTable,
        constants: &'t mut SymbolTable<ConstantMeta>,
        variables: &'t mut SymbolTable<VariableMeta>,
    ) -> Self {
        Self {
            keywords,
            splitters,
            operations,
            constants,
            variables,
        }
    }

    /// Tokenizes the whole input, line by line.
    ///
    /// Returns every token in input order, or the complete set of lexical
    /// errors when any lexeme is malformed; never a partial mix of the two.
    pub fn tokenize(&mut self, source: &str) -> Result<Vec<Token>, LexReport> {
        let mut tokens = Vec::new();
        let mut report = LexReport::new();

        for (line_index, line) in source.lines().enumerate() {
            self.scan_line(line, line_index + 1, &mut tokens, &mut report);
        }

        debug!("scanned {} tokens, {} errors", tokens.len(), report.len());

        if report.is_empty() {
            Ok(tokens)
        } else {
            Err(report)
        }
    }

    /// Scans one physical line.
    ///
    /// A synthetic newline is appended so a terminating transition exists
    /// for any trailing lexeme; the cursor can therefore never leave the
    /// line mid-run. Each position not yet consumed starts a fresh run from
    /// `Initial`, advancing the cursor exactly one character per step.
    fn scan_line(
        &mut self,
        line: &str,
        line_number: usize,
        tokens: &mut Vec<Token>,
        report: &mut LexReport,
    ) {
        let mut chars: Vec<char> = line.chars().collect();
        chars.push('\n');

        let mut cursor = 0;
        while cursor < chars.len() - 1 {
            let mut state = State::Initial.next(classify(chars[cursor]));
            let mut lexeme = String::new();
            let mut token = None;

            while !state.is_terminal() {
                if state == State::Keyword {
                    // Resolution state: the terminator is not consumed.
                    token = Some(self.resolve_word(&lexeme));
                    state = State::EndSuccess;
                    continue;
                }

                lexeme.push(chars[cursor]);
                cursor += 1;
                let next = state.next(classify(chars[cursor]));

                state = if next == State::EndSuccess {
                    match self.resolve(state, &lexeme) {
                        Resolution::Accept(resolved) => {
                            token = Some(resolved);
                            State::EndSuccess
                        }
                        Resolution::Discard => State::EndSuccess,
                        Resolution::Reject => State::EndError,
                    }
                } else {
                    next
                };
            }

            if state == State::EndError {
                report.push(LexError::new(line_number, cursor + 1));

                // Best-effort recovery: skip to the next space or newline
                // and resume scanning there.
                while chars[cursor] != '\n' && chars[cursor] != ' ' {
                    cursor += 1;
                }
            } else if let Some(token) = token {
                tokens.push(token);
            }
        }
    }

    /// Classifies a finished word as keyword or variable identifier.
    fn resolve_word(&mut self, lexeme: &str) -> Token {
        match self.keywords.find(lexeme) {
            Some(index) => Token::new(TableId::Keyword, index),
            None => Token::new(
                TableId::Variable,
                self.variables.add(lexeme, VariableMeta::default()),
            ),
        }
    }

    /// Resolves a lexeme whose run is about to accept, based on the state
    /// the automaton is leaving.
    fn resolve(&mut self, state: State, lexeme: &str) -> Resolution {
        match state {
            State::Int => Resolution::Accept(Token::new(
                TableId::Constant,
                self.constants.add(lexeme, ConstantMeta::default()),
            )),
            State::OpEq | State::OpEqEq | State::OpNeEq | State::OpOther | State::OpMinus => {
                match self.operations.find(lexeme) {
                    Some(index) => Resolution::Accept(Token::new(TableId::Operation, index)),
                    None => Resolution::Reject,
                }
            }
            State::Split => match self.splitters.find(lexeme) {
                Some(index) => Resolution::Accept(Token::new(TableId::Splitter, index)),
                None => Resolution::Reject,
            },
            // Word runs accept through the Keyword state and whitespace
            // runs produce nothing.
            _ => Resolution::Discard,
        }
    }
}
