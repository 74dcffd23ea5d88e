//! Table statement parsing for cqlforge.
//!
//! A schema source holds one table statement. [`parse_statement`] turns it into
//! a [`TableSchema`] with its columns ordered by raw name, ready to be lowered
//! by the code generators.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
pub mod describe;
mod error;
mod normalize;
mod parser;
mod source;
mod table;

pub use config::{CONFIG_FILE, DEFAULT_PACKAGE, ForgeConfig, PathsConfig, ProjectConfig};
pub use error::{Error, Result, SchemaParseError, SourceContext};
pub use normalize::normalize_body;
pub use parser::parse_statement;
pub use source::{SchemaFile, discover};
pub use table::{ColumnDefinition, TableSchema};
