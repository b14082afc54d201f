//! Common types and utilities for the gramc code generator.
//!
//! This crate provides foundational types used across all gramc crates:
//! - Tokens handed over by the grammar front end (`Token`, `TokenArena`)
//! - Target languages and their emission style
//! - Literal escaping
//! - Diagnostics and the error-reporting sink

// Token model - arena-owned tokens linked by index
pub mod token;
pub use token::{Token, TokenArena, TokenId, TokenKind};

// Target languages
pub mod target;
pub use target::{EmitStyle, TargetLanguage, UnknownLanguage};

// Literal escaping
pub mod escape;
pub use escape::{UnicodeEscapeStyle, escape_literal};

// Diagnostics
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticBag, DiagnosticSeverity, ErrorReporter};

#[cfg(test)]
#[path = "tests/escape_tests.rs"]
mod escape_tests;
