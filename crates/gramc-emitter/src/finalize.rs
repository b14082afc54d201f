//! Output assembly and file writing.
//!
//! Primary-style targets produce one file: an identity comment followed by
//! the main buffer. Split-style targets additionally produce a header whose
//! content is the include buffer wrapped in an include guard; the body then
//! starts with the identity comment, an include of that header and the
//! statics buffer, in that order, before the main buffer.

use anyhow::{Context, Result};
use gramc_common::ErrorReporter;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

use crate::buffers::BufferKind;
use crate::session::GenerationSession;

/// One assembled output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub path: PathBuf,
    pub contents: String,
}

/// Header path for a body file: same stem, header extension.
pub fn header_path(body: &Path, header_extension: &str) -> PathBuf {
    body.with_extension(header_extension)
}

/// Include-guard macro for a header: its file name with every
/// non-alphanumeric character replaced by `_`, uppercased.
pub fn include_guard(header: &Path) -> String {
    file_name_of(header)
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

fn write_output(output: &OutputFile) -> Result<()> {
    std::fs::write(&output.path, &output.contents)
        .with_context(|| format!("failed to write {}", output.path.display()))
}

impl GenerationSession {
    /// Build the output files for `file_name` without touching disk or the
    /// session buffers.
    pub fn assemble(&self, file_name: impl AsRef<Path>) -> Vec<OutputFile> {
        let body_path = file_name.as_ref();
        let identity = format!("/* {} */\n", file_name_of(body_path));
        let mut outputs = Vec::with_capacity(2);
        let mut body = identity;

        if let Some(header_extension) = self.profile().header_extension {
            let header = header_path(body_path, header_extension);
            let guard = include_guard(&header);
            let include = self.buffer(BufferKind::Include);
            let mut contents = String::with_capacity(include.len() + 2 * guard.len() + 32);
            contents.push_str(&format!("#ifndef {guard}\n#define {guard}\n"));
            contents.push_str(include);
            contents.push_str("#endif\n");

            body.push_str(&format!("#include \"{}\"\n", file_name_of(&header)));
            body.push_str(self.buffer(BufferKind::Statics));

            outputs.push(OutputFile {
                path: header,
                contents,
            });
        }

        body.push_str(self.buffer(BufferKind::Main));
        outputs.push(OutputFile {
            path: body_path.to_path_buf(),
            contents: body,
        });
        outputs
    }

    /// Write the output files for `file_name`.
    ///
    /// Pending warnings are flushed to `reporter` first. Each failed write is
    /// reported once as fatal; remaining files are still attempted. Returns
    /// the paths that were written.
    pub fn finalize(
        &mut self,
        file_name: impl AsRef<Path>,
        reporter: &mut dyn ErrorReporter,
    ) -> Vec<PathBuf> {
        self.flush_warnings(reporter);

        let mut written = Vec::new();
        for output in self.assemble(file_name) {
            match write_output(&output) {
                Ok(()) => {
                    debug!(path = %output.path.display(), bytes = output.contents.len(), "wrote output");
                    written.push(output.path);
                }
                Err(err) => {
                    error!("{err:#}");
                    let path = output.path.display().to_string();
                    reporter.fatal(&path, &format!("Could not create output file: {path}"));
                }
            }
        }
        written
    }
}
