//! Edge case tests for tpa-lex
