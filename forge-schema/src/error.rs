use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for cqlforge-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and its name so error factories don't need
/// both passed around separately.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    name: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            name: name.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the source name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.src.clone())
    }

    pub fn missing_open_paren(&self) -> Box<Error> {
        Box::new(Error::Parse(SchemaParseError::MissingOpenParen {
            src: self.named_source(),
            source_name: self.name.clone(),
        }))
    }

    pub fn missing_close_paren(&self, open: usize) -> Box<Error> {
        Box::new(Error::Parse(SchemaParseError::MissingCloseParen {
            src: self.named_source(),
            source_name: self.name.clone(),
            open: (open, 1).into(),
        }))
    }

    pub fn missing_table_name(&self, open: usize) -> Box<Error> {
        Box::new(Error::Parse(SchemaParseError::MissingTableName {
            src: self.named_source(),
            source_name: self.name.clone(),
            open: (open, 1).into(),
        }))
    }

    /// Create a TOML parse error for a config or description file.
    pub fn toml_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Toml {
            src: self.named_source(),
            span,
            source,
        })
    }
}

/// A table statement that does not have the expected shape.
#[derive(Debug, Error, Diagnostic)]
pub enum SchemaParseError {
    #[error("no '(' in table statement '{source_name}'")]
    #[diagnostic(
        code(cqlforge::missing_open_paren),
        help("expected `CREATE TABLE <name> (<column> <type>, ...)`")
    )]
    MissingOpenParen {
        #[source_code]
        src: NamedSource<String>,
        source_name: String,
    },

    #[error("no closing ')' in table statement '{source_name}'")]
    #[diagnostic(code(cqlforge::missing_close_paren))]
    MissingCloseParen {
        #[source_code]
        src: NamedSource<String>,
        source_name: String,
        #[label("column list opened here")]
        open: SourceSpan,
    },

    #[error("no table name in table statement '{source_name}'")]
    #[diagnostic(code(cqlforge::missing_table_name))]
    MissingTableName {
        #[source_code]
        src: NamedSource<String>,
        source_name: String,
        #[label("expected a table name before this")]
        open: SourceSpan,
    },
}

impl SchemaParseError {
    /// Name of the schema source that failed to parse.
    pub fn source_name(&self) -> &str {
        match self {
            Self::MissingOpenParen { source_name, .. }
            | Self::MissingCloseParen { source_name, .. }
            | Self::MissingTableName { source_name, .. } => source_name,
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(cqlforge::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' is not a directory")]
    #[diagnostic(
        code(cqlforge::not_a_directory),
        help("pass the directory holding one table statement per file")
    )]
    NotADirectory { path: PathBuf },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] SchemaParseError),

    #[error("failed to parse TOML")]
    #[diagnostic(code(cqlforge::toml))]
    Toml {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}
