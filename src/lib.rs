//! gramc: code emission back end for a grammar-to-source compiler.
//!
//! The emitter itself lives in `gramc-emitter`; this crate re-exports it and
//! adds the command-line driver and logging setup.

pub use gramc_common as common;
pub use gramc_emitter as emitter;

pub use gramc_common::{
    Diagnostic, DiagnosticBag, ErrorReporter, TargetLanguage, Token, TokenArena, TokenId,
    TokenKind,
};
pub use gramc_emitter::{BufferKind, GenerationOptions, GenerationSession, UnsupportedInputPolicy};

// Tracing subscriber setup for the binary
pub mod tracing_config;
#[cfg(test)]
#[path = "tests/tracing_config_tests.rs"]
mod tracing_config_tests;

// Command-line driver
pub mod cli;
