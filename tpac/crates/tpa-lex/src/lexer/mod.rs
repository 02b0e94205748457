//! Lexer module.
//!
//! The lexer implementation is split into focused components:
//! - `core` - `Lexer` struct and dispatch
//! - `identifier` - keyword, type keyword, boolean and identifier lexing
//! - `number` - integer and real literals
//! - `string` - string and character literals
//! - `operator` - longest-match symbol lexing
//! - `comment` - line comments

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
