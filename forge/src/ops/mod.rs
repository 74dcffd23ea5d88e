//! Core operations.
//!
//! This module contains the business logic for cqlforge commands,
//! separated from CLI argument parsing and output rendering.

pub mod bake;
pub mod check;
pub mod export;
pub mod load;
pub mod types;

pub use bake::{BakeOptions, bake};
pub use check::check;
pub use export::export;
pub use load::load_tables;
pub use types::types;
