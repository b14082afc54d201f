//! Code emission back end for the gramc grammar compiler.
//!
//! A [`GenerationSession`] collects the text of one generated output file:
//! - Reprinting of grammar tokens with their original layout and comments
//! - Three output buffers (main, include, statics) with one active at a time
//! - Per-language structural constructs (annotations, modifiers, class and
//!   method headers) driven by the [`profile`] table
//! - Assembly and writing of the final file(s)

// Replay position in the input token stream
pub mod cursor;
pub use cursor::TokenCursor;

// Output buffers
pub mod buffers;
pub use buffers::{BufferKind, OutputBuffers};

// Session options
pub mod options;
pub use options::{GenerationOptions, UnsupportedInputPolicy};

// Per-language structural emission table
pub mod profile;
pub use profile::{ClassHeader, LanguageProfile, MethodHeader, class_qualifier};

// Generation session
pub mod session;
pub use session::GenerationSession;

// Token reprinting
mod reprint;

// Structural constructs
mod structure;

// Output assembly and file writing
pub mod finalize;
pub use finalize::{OutputFile, header_path, include_guard};

#[cfg(test)]
#[path = "tests/cursor_tests.rs"]
mod cursor_tests;
#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod session_tests;
