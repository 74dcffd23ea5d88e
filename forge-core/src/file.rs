use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to write a generated artifact.
#[derive(Debug, Error)]
#[error("failed to write '{}'", path.display())]
pub struct ArtifactWriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, replacing any existing file
    fn write(&self, base: &Path) -> Result<(), ArtifactWriteError> {
        write_file(&self.path(base), &self.render())
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), ArtifactWriteError> {
    let wrap = |source| ArtifactWriteError {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(wrap)?;
    }
    std::fs::write(path, content).map_err(wrap)
}

/// A fully rendered file waiting to be written
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl GeneratedFile for File {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}
