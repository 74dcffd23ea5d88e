//! Types operation - the storage type table.

use cqlforge_core::StorageType;

use crate::reports::{TypeRow, TypesReport};

/// Field name used to show what a text fixture looks like.
const SAMPLE_FIELD: &str = "name";

pub fn types() -> TypesReport {
    let rows = StorageType::all()
        .iter()
        .map(|t| TypeRow {
            storage_type: t.name,
            target_type: t.target_type,
            fixture: t.fixture_literal(SAMPLE_FIELD),
        })
        .collect();

    TypesReport { rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_in_canonical_order() {
        let report = types();
        let names: Vec<_> = report.rows.iter().map(|r| r.storage_type).collect();
        assert_eq!(names, ["text", "timestamp", "decimal", "bigint", "boolean"]);
        assert_eq!(report.rows[0].fixture, "\"nAME\"");
    }
}
