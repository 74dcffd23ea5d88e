//! Storage type table.
//!
//! Maps column storage types to Java types and to the fixture literal used
//! when generated tests populate a field of that type.

use thiserror::Error;

/// A storage type known to the generator.
#[derive(Debug, Clone, Copy)]
pub struct StorageType {
    /// Storage type name as written in a table statement (e.g., "text").
    pub name: &'static str,
    /// Java type used for entity fields of this storage type.
    pub target_type: &'static str,
    literal: fn(&str) -> String,
}

/// The storage type table, in canonical order.
///
/// Each row keeps its name, target type and literal rule together.
const STORAGE_TYPES: &[StorageType] = &[
    StorageType {
        name: "text",
        target_type: "String",
        literal: text_literal,
    },
    StorageType {
        name: "timestamp",
        target_type: "Date",
        literal: timestamp_literal,
    },
    StorageType {
        name: "decimal",
        target_type: "double",
        literal: decimal_literal,
    },
    StorageType {
        name: "bigint",
        target_type: "int",
        literal: bigint_literal,
    },
    StorageType {
        name: "boolean",
        target_type: "boolean",
        literal: boolean_literal,
    },
];

/// Quoted field name with the first character lower-cased and the rest upper-cased.
fn text_literal(field_name: &str) -> String {
    let mut chars = field_name.chars();
    let body: String = match chars.next() {
        None => String::new(),
        Some(c) => c
            .to_lowercase()
            .chain(chars.flat_map(char::to_uppercase))
            .collect(),
    };
    format!("\"{}\"", body)
}

fn timestamp_literal(_: &str) -> String {
    "new Date()".to_string()
}

fn decimal_literal(_: &str) -> String {
    "1.1".to_string()
}

fn bigint_literal(_: &str) -> String {
    "1".to_string()
}

fn boolean_literal(_: &str) -> String {
    "true".to_string()
}

/// Storage type absent from the table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown storage type '{storage_type}'")]
pub struct UnknownTypeError {
    pub storage_type: String,
}

impl StorageType {
    /// All known storage types, in canonical order.
    pub fn all() -> &'static [StorageType] {
        STORAGE_TYPES
    }

    /// Render the fixture literal for a field of this type.
    pub fn fixture_literal(&self, field_name: &str) -> String {
        (self.literal)(field_name)
    }
}

impl PartialEq for StorageType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for StorageType {}

/// Look up a storage type by exact name.
pub fn resolve(storage_type: &str) -> Result<&'static StorageType, UnknownTypeError> {
    STORAGE_TYPES
        .iter()
        .find(|t| t.name == storage_type)
        .ok_or_else(|| UnknownTypeError {
            storage_type: storage_type.to_string(),
        })
}
