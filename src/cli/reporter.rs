use colored::Colorize;

use gramc_common::{Diagnostic, DiagnosticSeverity};

pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    pub fn render(&self, diagnostics: &[Diagnostic]) -> String {
        let mut out = String::new();
        for (index, diagnostic) in diagnostics.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&self.format_diagnostic(diagnostic));
        }
        out
    }

    /// Returns a string like: "Parser.cc - error: Could not create output file: Parser.cc"
    pub fn format_diagnostic(&self, diagnostic: &Diagnostic) -> String {
        let mut output = String::new();
        if !diagnostic.file_name.is_empty() {
            output.push_str(&diagnostic.file_name);
            output.push_str(" - ");
        }
        output.push_str(&self.format_severity(diagnostic.severity));
        output.push_str(": ");
        output.push_str(&diagnostic.message);
        output
    }

    fn format_severity(&self, severity: DiagnosticSeverity) -> String {
        let label = severity.name();
        if !self.color {
            return label.to_string();
        }

        match severity {
            DiagnosticSeverity::Error => label.red().bold().to_string(),
            DiagnosticSeverity::Warning => label.yellow().bold().to_string(),
        }
    }
}
