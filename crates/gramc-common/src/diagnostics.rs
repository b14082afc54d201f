//! Diagnostic Infrastructure
//!
//! Emission itself never fails; the only conditions worth reporting are a
//! failed file write (fatal) and, when requested, structural input that had
//! to be dropped (warning). Both flow through the [`ErrorReporter`] trait so
//! callers decide where they end up.
//!
//! # Components
//!
//! - `Diagnostic` - A single message with severity and the file it concerns
//! - `DiagnosticBag` - A collection of diagnostics for one generation run
//! - `ErrorReporter` - The sink the emitter reports into

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Diagnostic Severity
// =============================================================================

/// The severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    /// Generation of an output file failed
    Error = 1,
    /// Input was normalized or dropped
    Warning = 2,
}

impl DiagnosticSeverity {
    pub fn name(&self) -> &'static str {
        match self {
            DiagnosticSeverity::Error => "error",
            DiagnosticSeverity::Warning => "warning",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, DiagnosticSeverity::Error)
    }
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =============================================================================
// Diagnostic
// =============================================================================

/// A diagnostic message with severity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The file the diagnostic concerns, empty when not file-specific
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub file_name: String,
    pub message: String,
    pub severity: DiagnosticSeverity,
}

impl Diagnostic {
    pub fn new(
        file_name: impl Into<String>,
        message: impl Into<String>,
        severity: DiagnosticSeverity,
    ) -> Self {
        Diagnostic {
            file_name: file_name.into(),
            message: message.into(),
            severity,
        }
    }

    /// Create an error diagnostic.
    pub fn error(file_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(file_name, message, DiagnosticSeverity::Error)
    }

    /// Create a warning diagnostic.
    pub fn warning(file_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(file_name, message, DiagnosticSeverity::Warning)
    }

    pub fn is_error(&self) -> bool {
        self.severity.is_error()
    }

    /// Returns a string like: "error: Could not create output file: Parser.java"
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.severity, self.message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

// =============================================================================
// ErrorReporter
// =============================================================================

/// Sink for conditions found during emission.
pub trait ErrorReporter {
    /// Report a condition that makes an output file unusable.
    fn fatal(&mut self, file_name: &str, message: &str);

    /// Report input that was normalized or dropped.
    fn warning(&mut self, message: &str);
}

// =============================================================================
// DiagnosticBag
// =============================================================================

/// A collection of diagnostics for one generation run.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticBag {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
}

impl DiagnosticBag {
    pub fn new() -> Self {
        DiagnosticBag {
            diagnostics: Vec::new(),
            error_count: 0,
        }
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_error() {
            self.error_count += 1;
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Get only errors.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    /// Get only warnings.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == DiagnosticSeverity::Warning)
    }
}

impl ErrorReporter for DiagnosticBag {
    fn fatal(&mut self, file_name: &str, message: &str) {
        self.add(Diagnostic::error(file_name, message));
    }

    fn warning(&mut self, message: &str) {
        self.add(Diagnostic::warning("", message));
    }
}
