use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use gramc_common::TargetLanguage;

/// CLI arguments for the gramc binary.
#[derive(Parser, Debug)]
#[command(
    name = "gramc",
    version,
    about = "Reprint grammar action tokens into generated Java or C++ sources"
)]
pub struct CliArgs {
    /// Token dump (JSON) produced by the grammar front end.
    pub tokens: PathBuf,

    /// Output body file. C++ output also writes a header next to it.
    pub output: PathBuf,

    /// Options file (JSON with comments). Defaults to ./gramc.json when present.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Output language.
    #[arg(short = 'l', long, value_enum, ignore_case = true)]
    pub language: Option<Language>,

    /// Wrap the reprinted tokens in a class with this name.
    #[arg(long = "class")]
    pub class_name: Option<String>,

    /// Directory the output path is resolved against.
    #[arg(short = 'o', long = "out-dir")]
    pub out_dir: Option<PathBuf>,

    /// Report modifiers and superclasses the target language cannot express.
    #[arg(long = "warn-unsupported")]
    pub warn_unsupported: bool,

    /// Enable colored diagnostics even when stderr is not a terminal.
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Language {
    Java,
    #[value(name = "cpp", alias = "c++")]
    Cpp,
}

impl From<Language> for TargetLanguage {
    fn from(value: Language) -> Self {
        match value {
            Language::Java => TargetLanguage::Java,
            Language::Cpp => TargetLanguage::Cpp,
        }
    }
}
