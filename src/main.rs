use std::{env, fs::read_to_string, path::Path, process, time::Instant};

use log::info;

use scanner::errors::errors::LoadError;
use scanner::lexer::lexer::Tokenizer;
use scanner::tables::const_table::ConstTable;
use scanner::tables::defaults::{DEFAULT_KEYWORDS, DEFAULT_OPERATIONS, DEFAULT_SPLITTERS};
use scanner::tables::symbol_table::SymbolTable;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: scanner <source-file> [tables-dir]");
        process::exit(2);
    }

    let (keywords, splitters, operations) = match args.get(2) {
        Some(dir) => match load_tables(Path::new(dir)) {
            Ok(tables) => tables,
            Err(error) => {
                eprintln!("Error: {}", error);
                process::exit(1);
            }
        },
        None => (
            DEFAULT_KEYWORDS.clone(),
            DEFAULT_SPLITTERS.clone(),
            DEFAULT_OPERATIONS.clone(),
        ),
    };

    let source = match read_to_string(&args[1]) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("Can't read {}: {}", args[1], error);
            process::exit(1);
        }
    };

    let mut constants = SymbolTable::new();
    let mut variables = SymbolTable::new();
    let mut tokenizer = Tokenizer::new(
        &keywords,
        &splitters,
        &operations,
        &mut constants,
        &mut variables,
    );

    let start = Instant::now();
    match tokenizer.tokenize(&source) {
        Ok(tokens) => {
            let forms: Vec<String> = tokens.iter().map(|token| token.to_string()).collect();
            println!("{}", forms.join(" "));
            info!("tokenized in {:?}", start.elapsed());
        }
        Err(report) => {
            print!("{}", report);
            process::exit(1);
        }
    }
}

fn load_tables(dir: &Path) -> Result<(ConstTable, ConstTable, ConstTable), LoadError> {
    let keywords = ConstTable::from_file(dir.join("keywords.txt"))?;
    let splitters = ConstTable::from_file(dir.join("splitters.txt"))?;
    let operations = ConstTable::from_file(dir.join("operations.txt"))?;
    Ok((keywords, splitters, operations))
}
