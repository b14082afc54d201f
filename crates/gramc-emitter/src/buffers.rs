//! Output buffers for one generation pass.
//!
//! Three buffers always exist. Exactly one is active and receives every
//! append until the next switch. Whether a switch to the declarations or
//! statics buffer takes effect is decided by the session from the active
//! target language; this type only stores text and the selection.

use std::fmt;

/// Role of an output buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferKind {
    /// Primary body (definitions).
    Main,
    /// Declarations, written to a header on split-style targets.
    Include,
    /// Static initializers, prepended to the body on split-style targets.
    Statics,
}

impl BufferKind {
    pub fn name(self) -> &'static str {
        match self {
            BufferKind::Main => "main",
            BufferKind::Include => "include",
            BufferKind::Statics => "statics",
        }
    }
}

impl fmt::Display for BufferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub struct OutputBuffers {
    main: String,
    include: String,
    statics: String,
    active: BufferKind,
}

impl Default for OutputBuffers {
    fn default() -> Self {
        OutputBuffers::with_capacity(4096)
    }
}

impl OutputBuffers {
    pub fn with_capacity(main_capacity: usize) -> Self {
        OutputBuffers {
            main: String::with_capacity(main_capacity),
            include: String::new(),
            statics: String::new(),
            active: BufferKind::Main,
        }
    }

    pub fn active(&self) -> BufferKind {
        self.active
    }

    /// Select the buffer that receives subsequent appends.
    pub fn select(&mut self, kind: BufferKind) {
        self.active = kind;
    }

    pub fn get(&self, kind: BufferKind) -> &str {
        match kind {
            BufferKind::Main => &self.main,
            BufferKind::Include => &self.include,
            BufferKind::Statics => &self.statics,
        }
    }

    pub fn get_mut(&mut self, kind: BufferKind) -> &mut String {
        match kind {
            BufferKind::Main => &mut self.main,
            BufferKind::Include => &mut self.include,
            BufferKind::Statics => &mut self.statics,
        }
    }

    /// Append to the active buffer.
    pub fn push_str(&mut self, text: &str) {
        let kind = self.active;
        self.get_mut(kind).push_str(text);
    }

    /// Append to a specific buffer without changing the selection.
    pub fn push_to(&mut self, kind: BufferKind, text: &str) {
        self.get_mut(kind).push_str(text);
    }

    pub fn active_text(&self) -> &str {
        self.get(self.active)
    }
}
