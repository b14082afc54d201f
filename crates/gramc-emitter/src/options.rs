use gramc_common::TargetLanguage;

/// What to do with structural input a target cannot express, such as a
/// `final` modifier on a split-style target or a second superclass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnsupportedInputPolicy {
    /// Drop it silently.
    #[default]
    Ignore,
    /// Drop it and report a warning.
    Warn,
}

/// Options read by a generation session.
#[derive(Debug, Clone, Default)]
pub struct GenerationOptions {
    pub output_language: TargetLanguage,
    pub unsupported_input: UnsupportedInputPolicy,
}

impl GenerationOptions {
    pub fn new(output_language: TargetLanguage) -> Self {
        GenerationOptions {
            output_language,
            unsupported_input: UnsupportedInputPolicy::default(),
        }
    }

    pub fn with_unsupported_input(mut self, policy: UnsupportedInputPolicy) -> Self {
        self.unsupported_input = policy;
        self
    }
}
