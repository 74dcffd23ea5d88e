//! Built-in lints for table validation.

mod empty_table;
mod field_collision;
mod skipped_clause;

pub use empty_table::EmptyTableLint;
pub use field_collision::FieldCollisionLint;
pub use skipped_clause::SkippedClauseLint;
