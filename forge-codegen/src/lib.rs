//! Shared code generation utilities for the cqlforge code generator.
//!
//! This crate provides the language-agnostic half of generation, used by
//! language-specific generators (e.g., `cqlforge-codegen-java`).
//!
//! # Module Organization
//!
//! - [`builder`] - Indented text building (CodeBuilder, Indent)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, PreviewFile, etc.)
//! - [`pipeline`] - Per-table compilation phases (validate → lower)

pub mod builder;
pub mod language;
pub mod pipeline;
