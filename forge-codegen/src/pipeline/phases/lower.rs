//! Lower phase - transforms a parsed table into table IR.
//!
//! Every name and type a generator needs is computed here once, so the
//! artifacts of one table cannot disagree about them.

use cqlforge_core::{
    resolve, to_accessor_suffix, to_column_label, to_field_name, to_instance_name,
};
use cqlforge_ir::{ClassIdentity, FieldPlan, TableIR};
use cqlforge_schema::{ColumnDefinition, TableSchema};
use eyre::{Result, WrapErr};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that transforms the parsed table into table IR.
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Resolve storage types and names into table IR"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        ctx.ir = Some(lower_table(&ctx.schema)?);
        Ok(())
    }
}

/// Lower a parsed table into table IR.
///
/// Fails on the first column whose storage type is unknown.
pub fn lower_table(schema: &TableSchema) -> Result<TableIR> {
    let fields = schema
        .columns
        .iter()
        .map(|column| {
            lower_field(column).wrap_err_with(|| {
                format!(
                    "column '{}' of table '{}' in {}",
                    column.raw_name, schema.raw_table_name, schema.source
                )
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(TableIR {
        source: schema.source.clone(),
        raw_table_name: schema.raw_table_name.clone(),
        identity: lower_identity(&schema.class_name),
        fields,
    })
}

fn lower_identity(class_name: &str) -> ClassIdentity {
    ClassIdentity {
        entity_class_name: class_name.to_string(),
        dao_interface_name: format!("I{class_name}Dao"),
        dao_impl_name: format!("{class_name}DaoImpl"),
        service_interface_name: format!("I{class_name}Service"),
        service_impl_name: format!("{class_name}ServiceImpl"),
        instance_variable_name: to_instance_name(class_name),
    }
}

fn lower_field(column: &ColumnDefinition) -> Result<FieldPlan> {
    let storage = resolve(&column.storage_type)?;
    let field_name = to_field_name(&column.raw_name);

    Ok(FieldPlan {
        raw_name: column.raw_name.clone(),
        accessor_suffix: to_accessor_suffix(&field_name),
        storage_type: storage.name.to_string(),
        target_type: storage.target_type.to_string(),
        column_label: to_column_label(&column.raw_name),
        fixture_literal: storage.fixture_literal(&field_name),
        field_name,
    })
}
