//! Command-line interface for the grammar translator.
//!
//! Reads an ANTLR grammar file and prints the equivalent tree-sitter rule
//! table to stdout. Lexer rules come out as placeholder patterns marked for
//! manual completion.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use std::fs;
use std::process;

use grammarjs::{Error, LexicalPlacement, Options};

fn main() {
    let matches = Command::new("antlr2sitter")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate an ANTLR grammar into a tree-sitter rule table")
        .arg(
            Arg::new("path")
                .help("Path to the ANTLR grammar file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("keep-order")
                .long("keep-order")
                .help("Keep lexer rules interleaved in source order instead of trailing")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").expect("path is required");
    let options = Options {
        lexical_placement: if matches.get_flag("keep-order") {
            LexicalPlacement::SourceOrder
        } else {
            LexicalPlacement::Trailing
        },
    };

    if let Err(err) = run(path, options) {
        if let Some(Error::MalformedInput(_)) = err.downcast_ref::<Error>() {
            eprintln!("syntax errors");
        }
        eprintln!("{:#}", err);
        process::exit(1);
    }
}

fn run(path: &str, options: Options) -> Result<()> {
    let source =
        fs::read_to_string(path).with_context(|| format!("read grammar file: {}", path))?;
    let document = grammarjs::translate_source_with(&source, options)?;
    println!("{}", document);
    Ok(())
}
