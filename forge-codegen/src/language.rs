//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use cqlforge_core::{ArtifactWriteError, File, GeneratedFile};

/// Trait for language-specific code generators.
///
/// Implement this trait to add support for generating table artifacts in a
/// new language. Generation renders every file in memory; nothing touches the
/// disk until the caller hands the files to [`write_all`].
pub trait LanguageCodegen {
    /// Render all files with paths relative to the output directory.
    fn files(&self) -> Vec<File>;
}

/// Write already rendered files under `output_dir`, stopping at the first failure.
///
/// Returns the full paths of the written files, in order.
pub fn write_all(files: &[File], output_dir: &Path) -> Result<Vec<PathBuf>, ArtifactWriteError> {
    let mut written = Vec::with_capacity(files.len());
    for file in files {
        file.write(output_dir)?;
        written.push(GeneratedFile::path(file, output_dir));
    }
    Ok(written)
}

/// A rendered file shown by a dry run instead of being written.
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

impl From<&File> for PreviewFile {
    fn from(file: &File) -> Self {
        Self {
            path: file.path().display().to_string(),
            content: file.content().to_string(),
        }
    }
}
