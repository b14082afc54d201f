use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use gramc_common::TargetLanguage;
use gramc_emitter::{GenerationOptions, UnsupportedInputPolicy};

use crate::cli::args::CliArgs;

/// Name of the options file looked up in the working directory.
pub const DEFAULT_CONFIG_NAME: &str = "gramc.json";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GramcConfig {
    #[serde(default)]
    pub output_language: Option<String>,
    #[serde(default)]
    pub warn_unsupported: Option<bool>,
    #[serde(default)]
    pub out_dir: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ResolvedOptions {
    pub generation: GenerationOptions,
    pub out_dir: Option<PathBuf>,
}

pub fn parse_config(source: &str) -> Result<GramcConfig> {
    let normalized = normalize_jsonc(source);
    let config = serde_json::from_str(&normalized).context("failed to parse options JSON")?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<GramcConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read options file: {}", path.display()))?;
    parse_config(&source).with_context(|| format!("failed to parse options file: {}", path.display()))
}

/// Load the explicit options file, or `gramc.json` in `cwd` when it exists.
pub fn find_config(explicit: Option<&Path>, cwd: &Path) -> Result<GramcConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    let default_path = cwd.join(DEFAULT_CONFIG_NAME);
    if default_path.is_file() {
        return load_config(&default_path);
    }
    Ok(GramcConfig::default())
}

/// Merge file options with command-line flags; flags win.
pub fn resolve_options(config: &GramcConfig, args: &CliArgs) -> Result<ResolvedOptions> {
    let output_language = match (args.language, config.output_language.as_deref()) {
        (Some(language), _) => TargetLanguage::from(language),
        (None, Some(identifier)) => identifier
            .parse::<TargetLanguage>()
            .map_err(|err| anyhow!(err))?,
        (None, None) => TargetLanguage::default(),
    };

    let warn = args.warn_unsupported || config.warn_unsupported.unwrap_or(false);
    let unsupported_input = if warn {
        UnsupportedInputPolicy::Warn
    } else {
        UnsupportedInputPolicy::Ignore
    };

    let out_dir = args
        .out_dir
        .clone()
        .or_else(|| config.out_dir.as_ref().map(PathBuf::from));

    Ok(ResolvedOptions {
        generation: GenerationOptions {
            output_language,
            unsupported_input,
        },
        out_dir,
    })
}

#[derive(Clone, Copy)]
enum JsoncMode {
    Code,
    Str { escaped: bool },
    LineComment,
    BlockComment,
}

/// Rewrite JSON-with-comments into plain JSON in one pass.
///
/// Comments are dropped (their newlines are kept so serde_json error
/// positions still line up) and a comma followed only by whitespace or
/// comments before `}` or `]` is removed.
fn normalize_jsonc(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut mode = JsoncMode::Code;
    let mut dangling_comma: Option<usize> = None;
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        match mode {
            JsoncMode::Str { escaped } => {
                out.push(ch);
                mode = match ch {
                    _ if escaped => JsoncMode::Str { escaped: false },
                    '\\' => JsoncMode::Str { escaped: true },
                    '"' => JsoncMode::Code,
                    _ => JsoncMode::Str { escaped: false },
                };
            }
            JsoncMode::LineComment => {
                if ch == '\n' {
                    out.push(ch);
                    mode = JsoncMode::Code;
                }
            }
            JsoncMode::BlockComment => {
                if ch == '*' && chars.next_if_eq(&'/').is_some() {
                    mode = JsoncMode::Code;
                } else if ch == '\n' {
                    out.push(ch);
                }
            }
            JsoncMode::Code => match ch {
                '/' if chars.next_if_eq(&'/').is_some() => mode = JsoncMode::LineComment,
                '/' if chars.next_if_eq(&'*').is_some() => mode = JsoncMode::BlockComment,
                ',' => {
                    dangling_comma = Some(out.len());
                    out.push(ch);
                }
                '}' | ']' => {
                    if let Some(at) = dangling_comma.take() {
                        out.remove(at);
                    }
                    out.push(ch);
                }
                _ if ch.is_whitespace() => out.push(ch),
                _ => {
                    dangling_comma = None;
                    if ch == '"' {
                        mode = JsoncMode::Str { escaped: false };
                    }
                    out.push(ch);
                }
            },
        }
    }

    out
}
