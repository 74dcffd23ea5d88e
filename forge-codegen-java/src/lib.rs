//! Java artifact generation for cqlforge.
//!
//! Each table yields eight files: the entity, DAO and service interfaces with
//! their implementations, and three JUnit tests that share one set of fixture
//! values.

mod context;
mod files;
mod generator;

pub use context::GenerationContext;
pub use cqlforge_codegen::language::{LanguageCodegen, PreviewFile};
pub use files::GENERATED_HEADER;
pub use generator::Generator;
