//! Interactive line scanner.
//!
//! Reads one line at a time, scans it as its own unit and prints every token
//! it found. Ends on a line reading `exit` or at end of input.

use std::io::{self, BufRead, Write};

use tpa_lex::{scan, SymbolTables};
use tpa_util::{Diagnostic, SourceFile};
use tracing::debug;

use crate::commands::lex::deprecated_alias_warnings;
use crate::commands::traits::{Command, CommandDescription};
use crate::config::Config;
use crate::error::Result;

/// Prompt printed before each line is read.
pub const PROMPT: &str = "enter a line (or 'exit' to quit): ";

/// Line that ends the session.
pub const EXIT_COMMAND: &str = "exit";

/// Name under which console lines are reported.
const CONSOLE_NAME: &str = "<stdin>";

/// Arguments for the repl command.
#[derive(Debug, Clone, Default)]
pub struct ReplArgs;

/// Counts gathered over one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplSummary {
    /// Lines scanned, not counting the exit line.
    pub lines: usize,
    /// Tokens printed.
    pub tokens: usize,
    /// Lexical errors found.
    pub errors: usize,
}

/// Repl command handler.
pub struct ReplCommand;

impl Command for ReplCommand {
    type Args = ReplArgs;
    type Output = ReplSummary;

    fn new(_args: ReplArgs, _config: Config) -> Self {
        Self
    }

    fn execute(&self) -> Result<ReplSummary> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let stderr = io::stderr();
        run_session(
            stdin.lock(),
            &mut stdout.lock(),
            &mut stderr.lock(),
            SymbolTables::global(),
        )
    }

    fn name() -> &'static str {
        "repl"
    }
}

impl CommandDescription for ReplCommand {
    fn description() -> &'static str {
        "Scan console lines interactively"
    }

    fn help() -> &'static str {
        "Reads lines from standard input until `exit` or end of input. Each \
         line is scanned on its own and every token is printed as \
         `> found <kind>: <value>`."
    }
}

/// Runs a session over `input`, printing tokens to `out` and rendered
/// diagnostics to `err`.
pub fn run_session<R: BufRead, W: Write, E: Write>(
    mut input: R,
    out: &mut W,
    err: &mut E,
    tables: &SymbolTables,
) -> Result<ReplSummary> {
    let mut summary = ReplSummary::default();
    let mut buffer = String::new();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        buffer.clear();
        if input.read_line(&mut buffer)? == 0 {
            writeln!(out)?;
            break;
        }
        let line = buffer.strip_suffix('\n').unwrap_or(&buffer);
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line == EXIT_COMMAND {
            break;
        }

        summary.lines += 1;
        let output = scan(line, tables);
        debug!(line = summary.lines, tokens = output.tokens.len(), "scanned unit");

        for token in &output.tokens {
            if token.is_error() {
                writeln!(out, "> invalid token: {}", token.lexeme)?;
            } else {
                writeln!(out, "> found {}: {}", token.kind.describe(), token.value())?;
            }
        }
        summary.tokens += output.tokens.len();
        summary.errors += output.diagnostics.len();

        let source = SourceFile::new(CONSOLE_NAME, line);
        let mut diagnostics: Vec<Diagnostic> = output.diagnostics.iter().map(Diagnostic::from).collect();
        diagnostics.extend(deprecated_alias_warnings(CONSOLE_NAME, &output.tokens, tables));
        diagnostics.sort_by_key(|diagnostic| diagnostic.span.start);
        for diagnostic in &diagnostics {
            writeln!(err, "{}", diagnostic.render(&source))?;
        }
    }

    Ok(summary)
}
