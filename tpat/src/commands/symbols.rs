//! Symbols command implementation.
//!
//! Prints the lexer's symbol tables: every reserved word, operator,
//! delimiter and boolean spelling with its kind and report type.

use std::io::{self, Write};

use tpa_lex::{SymbolTables, TokenKind};

use crate::commands::traits::{Command, CommandDescription};
use crate::config::Config;
use crate::error::Result;
use crate::report::record_type;

/// Arguments for the symbols command.
#[derive(Debug, Clone, Default)]
pub struct SymbolsArgs;

/// Symbols command handler.
pub struct SymbolsCommand;

impl Command for SymbolsCommand {
    type Args = SymbolsArgs;
    /// Number of entries printed.
    type Output = usize;

    fn new(_args: SymbolsArgs, _config: Config) -> Self {
        Self
    }

    fn execute(&self) -> Result<usize> {
        let stdout = io::stdout();
        write_tables(&mut stdout.lock(), SymbolTables::global())
    }

    fn name() -> &'static str {
        "symbols"
    }
}

impl CommandDescription for SymbolsCommand {
    fn description() -> &'static str {
        "List reserved words, operators and delimiters"
    }

    fn help() -> &'static str {
        "Prints every entry of the symbol tables in table order with its \
         token kind and the record type used in token reports. Superseded \
         keyword spellings are marked as deprecated."
    }
}

/// Writes all tables to `out` and returns the number of entries.
pub fn write_tables<W: Write>(out: &mut W, tables: &SymbolTables) -> Result<usize> {
    let booleans = tables.booleans().map(|text| (text, TokenKind::Boolean));
    let sections: [(&str, Vec<(&'static str, TokenKind)>); 4] = [
        ("words", tables.words().collect()),
        ("operators", tables.operators().collect()),
        ("delimiters", tables.delimiters().collect()),
        ("booleans", booleans.collect()),
    ];

    let mut count = 0;
    for (index, (title, entries)) in sections.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}:", title)?;
        for (text, kind) in entries {
            let report = record_type(*kind).unwrap_or("-");
            write!(out, "  {:<12} {:<20} {}", text, kind.describe(), report)?;
            if tables.is_deprecated_alias(text) {
                write!(out, " (deprecated)")?;
            }
            writeln!(out)?;
            count += 1;
        }
    }

    out.flush()?;
    Ok(count)
}
