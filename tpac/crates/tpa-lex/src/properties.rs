//! Property-based tests for tpa-lex
