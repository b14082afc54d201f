use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use gramc_common::{DiagnosticBag, TokenArena, TokenId};
use gramc_emitter::{GenerationOptions, GenerationSession};

use crate::cli::args::CliArgs;
use crate::cli::config::{ResolvedOptions, find_config, resolve_options};

/// Token dump handed over by the grammar front end.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDump {
    pub tokens: TokenArena,
    /// Tokens to reprint, in order. When empty, every token that is not
    /// attached to another token as a special token is used.
    #[serde(default)]
    pub sequence: Vec<TokenId>,
}

impl TokenDump {
    pub fn parse(source: &str) -> Result<Self> {
        serde_json::from_str(source).context("failed to parse token dump JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read token dump: {}", path.display()))?;
        Self::parse(&source).with_context(|| format!("invalid token dump: {}", path.display()))
    }

    /// The explicit sequence, or all non-special tokens in arena order.
    pub fn effective_sequence(&self) -> Vec<TokenId> {
        if !self.sequence.is_empty() {
            return self.sequence.clone();
        }
        let specials: HashSet<TokenId> = self
            .tokens
            .iter()
            .flat_map(|(id, _)| self.tokens.special_chain(id))
            .collect();
        self.tokens
            .iter()
            .map(|(id, _)| id)
            .filter(|id| !specials.contains(id))
            .collect()
    }
}

#[derive(Debug)]
pub struct GenerationResult {
    pub diagnostics: DiagnosticBag,
    pub emitted_files: Vec<PathBuf>,
}

impl GenerationResult {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }
}

/// Reprint `dump` into `output`, optionally wrapped in a class.
///
/// On split-style targets the class goes to the declarations buffer, since
/// its members are defined inline.
pub fn generate(
    dump: &TokenDump,
    options: GenerationOptions,
    output: &Path,
    class_name: Option<&str>,
) -> GenerationResult {
    let mut session = GenerationSession::new(options);
    let split = session.language().is_split();

    if let Some(name) = class_name {
        session.switch_to_include_file();
        let modifier = (!split).then_some("public");
        session.gen_class_start(modifier, name, &[], &[]);
    }

    let sequence = dump.effective_sequence();
    debug!(tokens = sequence.len(), "reprinting token sequence");
    if let Some(&first) = sequence.first() {
        session.print_token_setup(&dump.tokens, first);
        session.print_token_list(&dump.tokens, &sequence);
    }

    if class_name.is_some() {
        session.append_line("");
        session.append_line(if split { "};" } else { "}" });
        session.switch_to_main_file();
    }

    let mut diagnostics = DiagnosticBag::new();
    let emitted_files = session.finalize(output, &mut diagnostics);
    GenerationResult {
        diagnostics,
        emitted_files,
    }
}

/// Output path: relative paths are resolved against the output directory
/// (if any), then against `cwd`.
pub fn output_path(options: &ResolvedOptions, output: &Path, cwd: &Path) -> PathBuf {
    if output.is_absolute() {
        return output.to_path_buf();
    }
    match &options.out_dir {
        Some(dir) if dir.is_absolute() => dir.join(output),
        Some(dir) => cwd.join(dir).join(output),
        None => cwd.join(output),
    }
}

pub fn run(args: &CliArgs, cwd: &Path) -> Result<GenerationResult> {
    let config = find_config(args.config.as_deref(), cwd)?;
    let options = resolve_options(&config, args)?;
    let tokens_path = cwd.join(&args.tokens);
    let dump = TokenDump::load(&tokens_path)?;
    let output = output_path(&options, &args.output, cwd);

    info!(
        language = options.generation.output_language.identifier(),
        output = %output.display(),
        "generating"
    );
    Ok(generate(
        &dump,
        options.generation.clone(),
        &output,
        args.class_name.as_deref(),
    ))
}
