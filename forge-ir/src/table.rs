//! Lowered table representation.

use serde::Serialize;

/// Table IR - everything a generator needs to emit one table's artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableIR {
    /// Name of the schema source the table came from (used in error context).
    pub source: String,
    /// Raw table identifier as written in the statement.
    pub raw_table_name: String,
    /// Class names shared by every artifact of the table.
    pub identity: ClassIdentity,
    /// One plan per column, sorted by raw column name.
    pub fields: Vec<FieldPlan>,
}

impl TableIR {
    /// Field names in artifact order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.field_name.as_str())
    }

    /// Check whether any field uses the given Java type.
    pub fn uses_type(&self, target_type: &str) -> bool {
        self.fields.iter().any(|f| f.target_type == target_type)
    }
}

/// Class and variable names derived from a table's class name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassIdentity {
    /// Entity class (e.g., `Widget`).
    pub entity_class_name: String,
    /// DAO interface (e.g., `IWidgetDao`).
    pub dao_interface_name: String,
    /// DAO implementation (e.g., `WidgetDaoImpl`).
    pub dao_impl_name: String,
    /// Service interface (e.g., `IWidgetService`).
    pub service_interface_name: String,
    /// Service implementation (e.g., `WidgetServiceImpl`).
    pub service_impl_name: String,
    /// Local variable holding an entity (e.g., `widget`).
    pub instance_variable_name: String,
}

/// Per-column rendering plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldPlan {
    /// Raw column name from the statement.
    pub raw_name: String,
    /// Java field name.
    pub field_name: String,
    /// Accessor suffix (`get`/`set` + suffix).
    pub accessor_suffix: String,
    /// Storage type from the statement.
    pub storage_type: String,
    /// Java type of the field.
    pub target_type: String,
    /// Label used in the `@Column` annotation.
    pub column_label: String,
    /// Fixture value used by generated tests.
    pub fixture_literal: String,
}

impl FieldPlan {
    pub fn getter(&self) -> String {
        format!("get{}", self.accessor_suffix)
    }

    pub fn setter(&self) -> String {
        format!("set{}", self.accessor_suffix)
    }
}
