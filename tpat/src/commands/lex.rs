//! Lex command implementation.
//!
//! Scans source files into token reports. Files are scanned in parallel on
//! a rayon pool; diagnostics and reports are emitted afterwards in the order
//! the files were given, so output never interleaves.

use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tpa_lex::{scan, scan_from, Keyword, LexDiagnostic, SymbolTables, Token, TokenKind};
use tpa_util::{Diagnostic, DiagnosticCode, SourceFile};
use tracing::{debug, info, warn};

use crate::commands::traits::{Command, CommandDescription};
use crate::config::{Config, ScanMode};
use crate::error::{Result, TpaError};
use crate::report::{build_records, report_path, write_report};

/// Arguments for the lex command.
#[derive(Debug, Clone, Default)]
pub struct LexArgs {
    /// Source files to scan.
    pub files: Vec<PathBuf>,
    /// Report directory, overriding `report.output_dir`.
    pub output: Option<PathBuf>,
    /// Unit size, overriding `scan.mode`.
    pub mode: Option<ScanMode>,
    /// Print reports to stdout instead of writing files.
    pub stdout: bool,
    /// Parallel jobs, overriding `scan.jobs`.
    pub jobs: Option<usize>,
}

/// Settings in effect once arguments are merged over the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LexSettings {
    pub mode: ScanMode,
    pub jobs: usize,
    pub output_dir: Option<PathBuf>,
    pub extension: String,
    pub pretty: bool,
    pub include_errors: bool,
    pub stdout: bool,
}

/// Counts gathered over one run of the command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexSummary {
    /// Files given on the command line.
    pub files: usize,
    /// Files that could not be read or whose report could not be written.
    pub failed: usize,
    /// Lexical errors over all files.
    pub errors: usize,
    /// Warnings over all files.
    pub warnings: usize,
}

impl LexSummary {
    /// Turns the counts into the command's outcome.
    ///
    /// File failures take precedence over lexical errors.
    pub fn into_result(self) -> Result<()> {
        if self.failed > 0 {
            return Err(TpaError::FileOperation(format!(
                "{} file(s) failed to process",
                self.failed
            )));
        }
        if self.errors > 0 {
            return Err(TpaError::LexicalErrors { count: self.errors });
        }
        Ok(())
    }
}

/// Everything a worker produces for one file. Owned, so it can outlive the
/// scan that borrowed the source text.
#[derive(Debug)]
struct LexedFile {
    source: SourceFile,
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    report: Vec<u8>,
    target: Option<PathBuf>,
}

/// Lex command handler.
pub struct LexCommand {
    args: LexArgs,
    config: Config,
}

impl LexCommand {
    /// Merge arguments over the loaded configuration.
    pub fn settings(&self) -> LexSettings {
        LexSettings {
            mode: self.args.mode.unwrap_or(self.config.scan.mode),
            jobs: self.args.jobs.unwrap_or(self.config.scan.jobs),
            output_dir: self
                .args
                .output
                .clone()
                .or_else(|| self.config.report.output_dir.clone()),
            extension: self.config.report.extension.clone(),
            pretty: self.config.report.pretty,
            include_errors: self.config.report.include_errors,
            stdout: self.args.stdout,
        }
    }

    fn validate(&self, settings: &LexSettings) -> Result<()> {
        if self.args.files.is_empty() {
            return Err(TpaError::Validation("No input files specified".to_string()));
        }
        if settings.jobs == 0 {
            return Err(TpaError::Validation("jobs must be at least 1".to_string()));
        }
        if let Some(dir) = &settings.output_dir {
            if dir.exists() && !dir.is_dir() {
                return Err(TpaError::Validation(format!(
                    "Output path is not a directory: {}",
                    dir.display()
                )));
            }
        }
        Ok(())
    }

    /// Report destination of every input, in input order; all `None` when
    /// reports go to stdout.
    ///
    /// Two inputs sharing a file stem would write the same report, so such
    /// a run is rejected before anything is scanned.
    fn report_targets(&self, settings: &LexSettings) -> Result<Vec<Option<PathBuf>>> {
        if settings.stdout {
            return Ok(vec![None; self.args.files.len()]);
        }

        let mut owners: HashMap<PathBuf, &Path> = HashMap::new();
        let mut targets = Vec::with_capacity(self.args.files.len());
        for path in &self.args.files {
            let target = report_path(path, settings.output_dir.as_deref(), &settings.extension)?;
            if let Some(previous) = owners.insert(target.clone(), path) {
                return Err(TpaError::Validation(format!(
                    "{} and {} would both write the report {}",
                    previous.display(),
                    path.display(),
                    target.display()
                )));
            }
            targets.push(Some(target));
        }
        Ok(targets)
    }

    fn prepare_output_dir(settings: &LexSettings) -> Result<()> {
        match &settings.output_dir {
            Some(dir) if !settings.stdout => {
                debug!("creating report directory {}", dir.display());
                fs::create_dir_all(dir).map_err(|e| {
                    TpaError::FileOperation(format!(
                        "Failed to create output directory {}: {}",
                        dir.display(),
                        e
                    ))
                })
            }
            _ => Ok(()),
        }
    }
}

impl Command for LexCommand {
    type Args = LexArgs;
    type Output = LexSummary;

    fn new(args: LexArgs, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<LexSummary> {
        let start_time = Instant::now();
        let settings = self.settings();
        self.validate(&settings)?;
        let targets = self.report_targets(&settings)?;
        Self::prepare_output_dir(&settings)?;

        debug!(
            jobs = settings.jobs,
            mode = %settings.mode,
            "scanning {} file(s)",
            self.args.files.len()
        );

        let pool = ThreadPoolBuilder::new().num_threads(settings.jobs).build()?;
        let tables = SymbolTables::global();
        let outcomes: Vec<Result<LexedFile>> = pool.install(|| {
            self.args
                .files
                .par_iter()
                .zip(targets)
                .map(|(path, target)| lex_file(path, target, tables, &settings))
                .collect()
        });

        let stdout = io::stdout();
        let stderr = io::stderr();
        let summary = emit(
            &settings,
            outcomes,
            &mut stdout.lock(),
            &mut stderr.lock(),
        )?;

        info!(
            "lexed {} file(s) in {:.2}s",
            summary.files,
            start_time.elapsed().as_secs_f64()
        );
        Ok(summary)
    }

    fn name() -> &'static str {
        "lex"
    }
}

impl CommandDescription for LexCommand {
    fn description() -> &'static str {
        "Scan source files into token reports"
    }

    fn help() -> &'static str {
        "Scans each file as one unit (file mode) or each line as one unit \
         (line mode) and writes a JSON token report per file. Diagnostics are \
         printed to stderr. Exits with status 1 if any lexical error was found."
    }
}

/// Scans one file and renders its report. Runs on a pool worker.
fn lex_file(
    path: &Path,
    target: Option<PathBuf>,
    tables: &SymbolTables,
    settings: &LexSettings,
) -> Result<LexedFile> {
    info!("lexing {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| {
        TpaError::FileOperation(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let source = SourceFile::new(path.display().to_string(), content);
    let text = source.content();
    let (tokens, lex_diagnostics) = match settings.mode {
        ScanMode::File => {
            let out = scan(text, tables);
            (out.tokens, out.diagnostics)
        }
        ScanMode::Line => scan_lines(text, tables),
    };
    debug!(tokens = tokens.len(), "scanned {}", path.display());

    let error_count = lex_diagnostics.len();
    if error_count > 0 {
        warn!("{} lexical error(s) in {}", error_count, path.display());
    }

    let mut diagnostics: Vec<Diagnostic> = lex_diagnostics.into_iter().map(Diagnostic::from).collect();
    diagnostics.extend(deprecated_alias_warnings(source.name(), &tokens, tables));
    diagnostics.sort_by_key(|diagnostic| diagnostic.span.start);

    let records = build_records(&tokens, settings.include_errors);
    let mut report = Vec::new();
    write_report(&mut report, &records, settings.pretty)?;

    Ok(LexedFile {
        source,
        diagnostics,
        error_count,
        report,
        target,
    })
}

/// Scans every line of `text` as its own unit.
///
/// Returned spans are offsets into `text`, not into the line, so the tokens
/// can be rendered against the whole file. Line terminators (`\n` and
/// `\r\n`) are not part of any unit, so a string literal never continues
/// onto the next line.
fn scan_lines<'src>(
    text: &'src str,
    tables: &SymbolTables,
) -> (Vec<Token<'src>>, Vec<LexDiagnostic>) {
    let mut tokens = Vec::new();
    let mut diagnostics = Vec::new();
    let mut offset = 0;

    for (index, raw) in text.split_inclusive('\n').enumerate() {
        let line = raw.strip_suffix('\n').unwrap_or(raw);
        let line = line.strip_suffix('\r').unwrap_or(line);
        let line_number = u32::try_from(index + 1).unwrap_or(u32::MAX);

        let out = scan_from(line, tables, line_number);
        debug!(line = line_number, tokens = out.tokens.len(), "scanned unit");

        tokens.extend(out.tokens.into_iter().map(|token| Token {
            span: token.span.shifted(offset),
            ..token
        }));
        diagnostics.extend(out.diagnostics.into_iter().map(|diagnostic| LexDiagnostic {
            span: diagnostic.span.shifted(offset),
            ..diagnostic
        }));

        offset += raw.len();
    }

    (tokens, diagnostics)
}

/// Warnings for loop keywords written with a superseded spelling.
pub(crate) fn deprecated_alias_warnings(
    origin: &str,
    tokens: &[Token<'_>],
    tables: &SymbolTables,
) -> Vec<Diagnostic> {
    tokens
        .iter()
        .filter(|token| {
            token.kind == TokenKind::Keyword(Keyword::Loop) && tables.is_deprecated_alias(token.lexeme)
        })
        .map(|token| {
            warn!(
                "{}:{}: deprecated keyword spelling `{}`",
                origin,
                token.span,
                token.lexeme
            );
            Diagnostic::warning(
                format!("deprecated keyword spelling `{}`", token.lexeme),
                token.span,
            )
            .with_code(DiagnosticCode::W_LEXER_DEPRECATED_KEYWORD)
            .with_help(format!("write `{}` instead", Keyword::Loop.as_str()))
        })
        .collect()
}

/// Emits worker results in input order: rendered diagnostics to `err`,
/// reports to `out` or to their files.
fn emit<W: Write, E: Write>(
    settings: &LexSettings,
    outcomes: Vec<Result<LexedFile>>,
    out: &mut W,
    err: &mut E,
) -> Result<LexSummary> {
    let mut summary = LexSummary::default();

    for outcome in outcomes {
        summary.files += 1;
        let lexed = match outcome {
            Ok(lexed) => lexed,
            Err(e) => {
                writeln!(err, "error: {}", e)?;
                summary.failed += 1;
                continue;
            }
        };

        for diagnostic in &lexed.diagnostics {
            writeln!(err, "{}", diagnostic.render(&lexed.source))?;
        }
        summary.errors += lexed.error_count;
        summary.warnings += lexed.diagnostics.len() - lexed.error_count;

        match &lexed.target {
            Some(target) if !settings.stdout => {
                if let Err(e) = fs::write(target, &lexed.report) {
                    writeln!(
                        err,
                        "error: Failed to write report {}: {}",
                        target.display(),
                        e
                    )?;
                    summary.failed += 1;
                    continue;
                }
                debug!("wrote {}", target.display());
            }
            _ => out.write_all(&lexed.report)?,
        }
    }

    out.flush()?;
    Ok(summary)
}
