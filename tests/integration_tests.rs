//! Integration tests for the full load-then-tokenize pipeline.
//!
//! These tests write table files and source files to disk, load the three
//! constant tables the way the binary does, and verify the token sequences
//! and error reports produced for whole programs.

use std::fs;

use scanner::errors::errors::LoadError;
use scanner::lexer::lexer::Tokenizer;
use scanner::lexer::tokens::{TableId, Token};
use scanner::tables::const_table::ConstTable;
use scanner::tables::symbol_table::SymbolTable;
use tempfile::tempdir;

fn write_tables(dir: &std::path::Path) {
    fs::write(dir.join("keywords.txt"), "0 int 1 if 2 else 3 while\n").unwrap();
    fs::write(dir.join("splitters.txt"), "0 , 1 ; 2 ( 3 ) 4 { 5 }\n").unwrap();
    fs::write(
        dir.join("operations.txt"),
        "0 = 1 == 2 != 3 + 4 - 5 * 6 <\n",
    )
    .unwrap();
}

fn tok(table: TableId, index: usize) -> Token {
    Token::new(table, index)
}

#[test]
fn test_tokenize_program_with_loaded_tables() {
    let dir = tempdir().unwrap();
    write_tables(dir.path());

    let keywords = ConstTable::from_file(dir.path().join("keywords.txt")).unwrap();
    let splitters = ConstTable::from_file(dir.path().join("splitters.txt")).unwrap();
    let operations = ConstTable::from_file(dir.path().join("operations.txt")).unwrap();

    let source_path = dir.path().join("program.txt");
    fs::write(&source_path, "int x = 5;\nwhile (x < 10) {\n    x = x + 1;\n}\n").unwrap();
    let source = fs::read_to_string(&source_path).unwrap();

    let mut constants = SymbolTable::new();
    let mut variables = SymbolTable::new();
    let tokens = Tokenizer::new(
        &keywords,
        &splitters,
        &operations,
        &mut constants,
        &mut variables,
    )
    .tokenize(&source)
    .unwrap();

    assert_eq!(
        tokens,
        vec![
            tok(TableId::Keyword, 0),
            tok(TableId::Variable, 0),
            tok(TableId::Operation, 0),
            tok(TableId::Constant, 0),
            tok(TableId::Splitter, 1),
            tok(TableId::Keyword, 3),
            tok(TableId::Splitter, 2),
            tok(TableId::Variable, 0),
            tok(TableId::Operation, 6),
            tok(TableId::Constant, 1),
            tok(TableId::Splitter, 3),
            tok(TableId::Splitter, 4),
            tok(TableId::Variable, 0),
            tok(TableId::Operation, 0),
            tok(TableId::Variable, 0),
            tok(TableId::Operation, 3),
            tok(TableId::Constant, 2),
            tok(TableId::Splitter, 1),
            tok(TableId::Splitter, 5),
        ]
    );

    // One variable, three distinct numeric constants.
    assert_eq!(variables.len(), 1);
    assert_eq!(variables.find("x"), Some(0));
    assert_eq!(constants.len(), 3);
    assert_eq!(constants.entry_by_index(0).map(|(text, _)| text), Some("5"));
    assert_eq!(constants.entry_by_index(1).map(|(text, _)| text), Some("10"));
    assert_eq!(constants.entry_by_index(2).map(|(text, _)| text), Some("1"));
}

#[test]
fn test_tokenize_program_with_invalid_character() {
    let dir = tempdir().unwrap();
    write_tables(dir.path());

    let keywords = ConstTable::from_file(dir.path().join("keywords.txt")).unwrap();
    let splitters = ConstTable::from_file(dir.path().join("splitters.txt")).unwrap();
    let operations = ConstTable::from_file(dir.path().join("operations.txt")).unwrap();

    let mut constants = SymbolTable::new();
    let mut variables = SymbolTable::new();
    let report = Tokenizer::new(
        &keywords,
        &splitters,
        &operations,
        &mut constants,
        &mut variables,
    )
    .tokenize("int x = 5;\nx = x @ 2;\n")
    .unwrap_err();

    assert_eq!(report.len(), 1);
    assert_eq!(report.errors()[0].line, 2);
    assert_eq!(report.errors()[0].column, 7);
    assert!(report.to_string().contains("invalid character at (2, 7)"));
}

#[test]
fn test_missing_table_file_fails_before_tokenizing() {
    let dir = tempdir().unwrap();

    let result = ConstTable::from_file(dir.path().join("keywords.txt"));

    assert!(matches!(result, Err(LoadError::Io { .. })));
}

#[test]
fn test_malformed_table_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("keywords.txt");
    fs::write(&path, "0 int one if\n").unwrap();

    let result = ConstTable::from_file(&path);

    assert!(matches!(
        result,
        Err(LoadError::InvalidIndex { value }) if value == "one"
    ));
}
