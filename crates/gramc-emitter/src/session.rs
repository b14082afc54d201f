//! Generation session: the state of one output-file generation.
//!
//! A session owns the three output buffers, the active-buffer selection and
//! the token cursor. Nothing here is shared between sessions, so separate
//! output files can be generated concurrently with one session each.

use gramc_common::{Diagnostic, ErrorReporter, TargetLanguage};
use tracing::{debug, trace, warn};

use crate::buffers::{BufferKind, OutputBuffers};
use crate::cursor::TokenCursor;
use crate::options::{GenerationOptions, UnsupportedInputPolicy};
use crate::profile::{LanguageProfile, profile};

pub struct GenerationSession {
    pub(crate) options: GenerationOptions,
    pub(crate) cursor: TokenCursor,
    pub(crate) buffers: OutputBuffers,
    pending_warnings: Vec<Diagnostic>,
}

impl GenerationSession {
    pub fn new(options: GenerationOptions) -> Self {
        debug!(
            language = options.output_language.identifier(),
            "opening generation session"
        );
        GenerationSession {
            options,
            cursor: TokenCursor::default(),
            buffers: OutputBuffers::default(),
            pending_warnings: Vec::new(),
        }
    }

    pub fn for_language(language: TargetLanguage) -> Self {
        Self::new(GenerationOptions::new(language))
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// The active target language.
    pub fn language(&self) -> TargetLanguage {
        self.options.output_language
    }

    pub(crate) fn profile(&self) -> &'static LanguageProfile {
        profile(self.language())
    }

    pub fn cursor(&self) -> TokenCursor {
        self.cursor
    }

    /// Move the cursor to an explicit source position.
    pub fn set_cursor(&mut self, line: u32, column: u32) {
        self.cursor.reset(line, column);
    }

    // =========================================================================
    // Raw Output
    // =========================================================================

    /// Append text to the active buffer.
    pub fn append(&mut self, text: &str) {
        self.buffers.push_str(text);
    }

    /// Append text followed by a newline.
    pub fn append_line(&mut self, text: &str) {
        self.buffers.push_str(text);
        self.buffers.push_str("\n");
    }

    /// Append several fragments in order.
    pub fn append_all(&mut self, fragments: &[&str]) {
        for fragment in fragments {
            self.buffers.push_str(fragment);
        }
    }

    // =========================================================================
    // Buffer Selection
    // =========================================================================

    pub fn active_buffer(&self) -> BufferKind {
        self.buffers.active()
    }

    /// Content of any buffer.
    pub fn buffer(&self, kind: BufferKind) -> &str {
        self.buffers.get(kind)
    }

    /// Select `kind` as the active buffer.
    ///
    /// On primary-style targets only the main buffer exists in the output,
    /// so switching to the include or statics buffer is ignored.
    pub fn switch_to(&mut self, kind: BufferKind) {
        if kind != BufferKind::Main && !self.language().is_split() {
            trace!(buffer = kind.name(), "buffer switch ignored for primary-style target");
            return;
        }
        trace!(from = self.buffers.active().name(), to = kind.name(), "switching buffer");
        self.buffers.select(kind);
    }

    pub fn switch_to_main_file(&mut self) {
        self.switch_to(BufferKind::Main);
    }

    pub fn switch_to_include_file(&mut self) {
        self.switch_to(BufferKind::Include);
    }

    pub fn switch_to_statics_file(&mut self) {
        self.switch_to(BufferKind::Statics);
    }

    /// Text of the active buffer plus a trailing newline.
    pub fn generated_code(&self) -> String {
        let mut code = self.buffers.active_text().to_string();
        code.push('\n');
        code
    }

    // =========================================================================
    // Unsupported Input
    // =========================================================================

    pub(crate) fn note_unsupported(&mut self, message: String) {
        if self.options.unsupported_input == UnsupportedInputPolicy::Ignore {
            return;
        }
        warn!("{message}");
        self.pending_warnings.push(Diagnostic::warning("", message));
    }

    /// Warnings recorded under [`UnsupportedInputPolicy::Warn`] that have
    /// not been flushed yet.
    pub fn pending_warnings(&self) -> &[Diagnostic] {
        &self.pending_warnings
    }

    /// Forward pending warnings to `reporter`.
    pub fn flush_warnings(&mut self, reporter: &mut dyn ErrorReporter) {
        for diagnostic in self.pending_warnings.drain(..) {
            reporter.warning(&diagnostic.message);
        }
    }
}
