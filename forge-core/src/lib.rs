//! Core utilities and types for the cqlforge code generator.
//!
//! This crate provides the two leaf components every other crate builds on:
//! the storage type table and the naming conventions, plus the file sink
//! used to write generated artifacts.

mod file;
mod naming;
mod storage;

// File operations
pub use file::{ArtifactWriteError, File, GeneratedFile};
// Naming conventions
pub use naming::{
    getter_name, setter_name, to_accessor_suffix, to_class_name, to_column_label, to_field_name,
    to_instance_name,
};
// Storage types
pub use storage::{StorageType, UnknownTypeError, resolve};
