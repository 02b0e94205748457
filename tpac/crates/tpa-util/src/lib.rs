//! tpa-util - Core Utilities and Foundation Types
//!
//! This crate provides the foundation types shared by the Tupã toolchain:
//!
//! - [`span`] - Source locations ([`Span`]) and line-indexed source files ([`SourceFile`])
//! - [`diagnostic`] - Presentation-level diagnostics with codes, help text and
//!   rendered source snippets
//! - [`error`] - Error types for the fallible operations above
//!
//! The lexer reports its faults as plain data. Turning those faults into
//! something a person reads on a terminal (a header, a `-->` location line and
//! a caret-underlined snippet) happens here, so that every front end renders
//! diagnostics the same way.
//!
//! # Examples
//!
//! ```
//! use tpa_util::{Diagnostic, DiagnosticCode, SourceFile, Span};
//!
//! let file = SourceFile::new("main.tpa", "tuichaveva #");
//! let diag = Diagnostic::error("unknown token '#'", Span::new(11, 12, 1, 12))
//!     .with_code(DiagnosticCode::E_LEXER_UNKNOWN_TOKEN);
//!
//! let rendered = diag.render(&file);
//! assert!(rendered.contains("error[E1004]"));
//! assert!(rendered.contains("main.tpa:1:12"));
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticCode, Level, SourceSnippet};
pub use error::{SourceError, SourceResult};
pub use span::{SourceFile, Span};
