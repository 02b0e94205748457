//! Token reports.
//!
//! A report is a JSON array with one `{"type", "value"}` object per token,
//! the format read by the downstream syntax checker. Comments never appear
//! in a report.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tpa_lex::{Bracket, Keyword, Operator, Punctuation, Relational, Token, TokenKind};

use crate::error::{Result, TpaError};

/// One report entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record<'a> {
    /// Record type name, e.g. `IF_CONDITIONAL`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Literal value of the token.
    pub value: &'a str,
}

/// Record type name for a token kind, or `None` for kinds left out of
/// reports.
pub fn record_type(kind: TokenKind) -> Option<&'static str> {
    let name = match kind {
        TokenKind::Integer | TokenKind::Real => "NUMBER",
        TokenKind::StringLiteral => "LITERAL_STRING",
        TokenKind::CharLiteral => "LITERAL_CHAR",
        TokenKind::Boolean => "BOOLEAN",
        TokenKind::Identifier => "IDENTIFIER",
        TokenKind::TypeKeyword(_) => "TYPE",
        TokenKind::Comment => return None,
        TokenKind::Error(_) => "ERROR",
        TokenKind::Keyword(keyword) => match keyword {
            Keyword::ProgramStart => "PROGRAM_START",
            Keyword::ProgramEnd => "PROGRAM_END",
            Keyword::If => "IF_CONDITIONAL",
            Keyword::Else => "ELSE_CONDITIONAL",
            Keyword::Loop => "WHILE_LOOP",
            Keyword::For => "FOR_LOOP",
            Keyword::Input => "DATA_INPUT",
            Keyword::Output => "DATA_OUTPUT",
        },
        TokenKind::Operator(op) => match op {
            Operator::Assign => "ASSIGN",
            Operator::Equals => "EQUAL",
            Operator::Different => "DIFFERENT",
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Add => "SUM",
            Operator::Subtract => "SUBTRACT",
            Operator::Multiply => "MULTIPLY",
            Operator::Divide => "DIVIDE",
        },
        TokenKind::Relational(op) => match op {
            Relational::GreaterEqual => "GREATER_EQUAL",
            Relational::LessEqual => "LESS_EQUAL",
            Relational::Greater => "GREATER",
            Relational::Less => "LESS",
            Relational::Equal => "SINGLE_EQUAL",
        },
        TokenKind::Bracket(bracket) => match bracket {
            Bracket::ParenOpen => "LEFT_PAREN",
            Bracket::ParenClose => "RIGHT_PAREN",
            Bracket::BlockOpen => "BLOCK_START",
            Bracket::BlockClose => "BLOCK_END",
            Bracket::RoundOpen => "ROUND_OPEN",
            Bracket::RoundClose => "ROUND_CLOSE",
            Bracket::BraceOpen => "BRACE_OPEN",
            Bracket::BraceClose => "BRACE_CLOSE",
            Bracket::SquareOpen => "SQUARE_OPEN",
            Bracket::SquareClose => "SQUARE_CLOSE",
        },
        TokenKind::Punctuation(punct) => match punct {
            Punctuation::StatementEnd => "COMMAND_END",
            Punctuation::ArgumentSeparator => "ARGUMENT_SEPARATOR",
            Punctuation::Colon => "COLON",
        },
    };
    Some(name)
}

/// Builds the records for `tokens`, in order.
pub fn build_records<'a>(tokens: &[Token<'a>], include_errors: bool) -> Vec<Record<'a>> {
    tokens
        .iter()
        .filter(|token| include_errors || !token.is_error())
        .filter_map(|token| {
            record_type(token.kind).map(|kind| Record {
                kind,
                value: token.value(),
            })
        })
        .collect()
}

/// Serializes `records` as a JSON array followed by a newline.
pub fn write_report<W: Write>(mut writer: W, records: &[Record<'_>], pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, records)?;
    } else {
        serde_json::to_writer(&mut writer, records)?;
    }
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Where the report for `input` goes.
///
/// The report keeps the input's file stem, takes `extension`, and lands in
/// `output_dir` when given or next to the input otherwise. A report that
/// would overwrite its own input is refused.
pub fn report_path(input: &Path, output_dir: Option<&Path>, extension: &str) -> Result<PathBuf> {
    let stem = input.file_stem().ok_or_else(|| {
        TpaError::Validation(format!("Input path has no file name: {}", input.display()))
    })?;

    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    let path = dir
        .join(stem)
        .with_extension(extension.trim_start_matches('.'));

    if path == input {
        return Err(TpaError::Validation(format!(
            "Report would overwrite its input: {} (choose another extension or output directory)",
            input.display()
        )));
    }

    Ok(path)
}
