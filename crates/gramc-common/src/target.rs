//! Target languages the generator can emit.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How declarations and definitions are laid out for a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmitStyle {
    /// Declarations and definitions share one file.
    Primary,
    /// Declarations go to a separate header file.
    Split,
}

/// The active output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TargetLanguage {
    #[default]
    #[serde(rename = "java")]
    Java,
    #[serde(rename = "c++", alias = "cpp")]
    Cpp,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 2] = [TargetLanguage::Java, TargetLanguage::Cpp];

    /// Identifier used in option files and on the command line.
    pub fn identifier(self) -> &'static str {
        match self {
            TargetLanguage::Java => "java",
            TargetLanguage::Cpp => "c++",
        }
    }

    pub fn style(self) -> EmitStyle {
        match self {
            TargetLanguage::Java => EmitStyle::Primary,
            TargetLanguage::Cpp => EmitStyle::Split,
        }
    }

    pub fn is_split(self) -> bool {
        self.style() == EmitStyle::Split
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Error for an unrecognized language identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown output language '{}'. Expected 'java' or 'c++'",
            self.0
        )
    }
}

impl std::error::Error for UnknownLanguage {}

impl FromStr for TargetLanguage {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "java" => Ok(TargetLanguage::Java),
            "c++" | "cpp" => Ok(TargetLanguage::Cpp),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}
