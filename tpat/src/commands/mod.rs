//! Command modules for the tpa CLI.
//!
//! Each subcommand lives in its own file and implements
//! [`traits::Command`].

pub mod traits;

pub mod lex;
pub mod repl;
pub mod symbols;

pub use lex::{LexArgs, LexCommand, LexSummary};
pub use repl::{ReplArgs, ReplCommand};
pub use symbols::{SymbolsArgs, SymbolsCommand};
