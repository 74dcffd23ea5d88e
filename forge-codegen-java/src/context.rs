//! Per-table accumulators for Java generation.

use cqlforge_codegen::builder::CodeBuilder;
use cqlforge_ir::{FieldPlan, TableIR};

/// Rendered fragments for one table, in field order.
///
/// A context is built from exactly one [`TableIR`] and owned by the synthesis
/// call that built it. Every artifact reads the same fragments, so the entity
/// and the three test fixtures always agree on field names and order.
#[derive(Debug, Default)]
pub struct GenerationContext {
    field_declarations: Vec<String>,
    accessor_pairs: Vec<String>,
    setter_calls: Vec<String>,
}

impl GenerationContext {
    /// Build the accumulators for one table.
    pub fn new(table: &TableIR) -> Self {
        let mut ctx = Self::default();
        for field in &table.fields {
            ctx.push_field(field);
        }
        ctx
    }

    fn push_field(&mut self, field: &FieldPlan) {
        self.field_declarations.push(format!(
            "@Column(name=\"{}\")\nprivate {} {};",
            field.column_label, field.target_type, field.field_name
        ));
        self.accessor_pairs.push(accessor_pair(
            &field.target_type,
            &field.field_name,
            &field.accessor_suffix,
        ));
        self.setter_calls
            .push(format!("{}({})", field.setter(), field.fixture_literal));
    }

    /// `@Column` annotated field declarations, one per column.
    pub fn field_declarations(&self) -> &[String] {
        &self.field_declarations
    }

    /// Getter and setter pairs, one per column.
    pub fn accessor_pairs(&self) -> &[String] {
        &self.accessor_pairs
    }

    /// Fixture setter calls without receiver (e.g., `setColor("cOLOR")`).
    pub fn setter_calls(&self) -> &[String] {
        &self.setter_calls
    }

    /// Fixture setter statements on `receiver` (e.g., `widget.setColor("cOLOR");`).
    pub fn setter_statements<'a>(&'a self, receiver: &'a str) -> impl Iterator<Item = String> + 'a {
        self.setter_calls
            .iter()
            .map(move |call| format!("{receiver}.{call};"))
    }
}

/// Render a getter and setter for one field.
pub(crate) fn accessor_pair(target_type: &str, field_name: &str, suffix: &str) -> String {
    CodeBuilder::java()
        .braced(&format!("public {target_type} get{suffix}()"), |b| {
            b.line(&format!("return {field_name};"))
        })
        .blank()
        .braced(
            &format!("public void set{suffix}({target_type} {field_name})"),
            |b| b.line(&format!("this.{field_name} = {field_name};")),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use cqlforge_ir::{ClassIdentity, FieldPlan};

    use super::*;

    fn field(name: &str, suffix: &str, target: &str, literal: &str) -> FieldPlan {
        FieldPlan {
            raw_name: name.to_string(),
            field_name: name.to_string(),
            accessor_suffix: suffix.to_string(),
            storage_type: String::new(),
            target_type: target.to_string(),
            column_label: name.to_uppercase(),
            fixture_literal: literal.to_string(),
        }
    }

    fn table(fields: Vec<FieldPlan>) -> TableIR {
        TableIR {
            source: "widget.db".to_string(),
            raw_table_name: "widget".to_string(),
            identity: ClassIdentity {
                entity_class_name: "Widget".to_string(),
                dao_interface_name: "IWidgetDao".to_string(),
                dao_impl_name: "WidgetDaoImpl".to_string(),
                service_interface_name: "IWidgetService".to_string(),
                service_impl_name: "WidgetServiceImpl".to_string(),
                instance_variable_name: "widget".to_string(),
            },
            fields,
        }
    }

    #[test]
    fn test_one_fragment_per_field() {
        let ctx = GenerationContext::new(&table(vec![
            field("color", "Color", "String", "\"cOLOR\""),
            field("price", "Price", "double", "1.1"),
        ]));

        assert_eq!(
            ctx.field_declarations(),
            [
                "@Column(name=\"COLOR\")\nprivate String color;",
                "@Column(name=\"PRICE\")\nprivate double price;",
            ]
        );
        assert_eq!(ctx.setter_calls(), ["setColor(\"cOLOR\")", "setPrice(1.1)"]);
        assert_eq!(ctx.accessor_pairs().len(), 2);
    }

    #[test]
    fn test_setter_statements() {
        let ctx = GenerationContext::new(&table(vec![field("price", "Price", "double", "1.1")]));
        let statements: Vec<_> = ctx.setter_statements("widget").collect();
        assert_eq!(statements, ["widget.setPrice(1.1);"]);
    }

    #[test]
    fn test_accessor_pair() {
        assert_eq!(
            accessor_pair("double", "price", "Price"),
            "public double getPrice() {\n    return price;\n}\n\n\
             public void setPrice(double price) {\n    this.price = price;\n}\n"
        );
    }

    #[test]
    fn test_empty_table() {
        let ctx = GenerationContext::new(&table(Vec::new()));
        assert!(ctx.field_declarations().is_empty());
        assert!(ctx.setter_calls().is_empty());
    }
}
