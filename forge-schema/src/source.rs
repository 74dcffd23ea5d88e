use std::path::{Path, PathBuf};

use crate::{Error, Result, TableSchema, parse_statement};

/// A schema source file with both raw content and parsed table.
#[derive(Debug)]
pub struct SchemaFile {
    path: PathBuf,
    content: String,
    table: TableSchema,
}

impl SchemaFile {
    /// Open and parse a schema source file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let source_name = path.display().to_string();
        let table = parse_statement(&content, &source_name)?;

        Ok(Self {
            path,
            content,
            table,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed table.
    pub fn table(&self) -> &TableSchema {
        &self.table
    }

    pub fn into_table(self) -> TableSchema {
        self.table
    }
}

/// List the schema sources in `dir`, sorted by path.
///
/// Only regular files directly inside `dir` are returned; subdirectories and
/// hidden files (leading `.`) are ignored.
pub fn discover(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(Box::new(Error::NotADirectory {
            path: dir.to_path_buf(),
        }));
    }

    let entries = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut sources = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();

        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        if hidden || !path.is_file() {
            continue;
        }
        sources.push(path);
    }

    sources.sort();
    Ok(sources)
}
