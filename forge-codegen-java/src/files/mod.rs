//! One module per generated Java artifact.

mod dao_impl;
mod dao_interface;
mod entity;
mod service_impl;
mod service_interface;

use cqlforge_codegen::builder::CodeBuilder;
use cqlforge_ir::{ClassIdentity, TableIR};
pub use dao_impl::DaoImpl;
pub use dao_interface::DaoInterface;
pub use dao_test::DaoTest;
pub use domain_test::DomainTest;
pub use entity::Entity;
pub use service_impl::ServiceImpl;
pub use service_interface::ServiceInterface;
pub use service_test::ServiceTest;

use crate::GenerationContext;

/// First line of every generated artifact.
pub const GENERATED_HEADER: &str = "// Generated by cqlforge. Do not edit.";

/// Everything an artifact reads: the package root, the lowered table and the
/// table's accumulators.
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    pub package: &'a str,
    pub table: &'a TableIR,
    pub ctx: &'a GenerationContext,
}

impl<'a> TableView<'a> {
    pub fn identity(&self) -> &'a ClassIdentity {
        &self.table.identity
    }

    pub fn class_name(&self) -> &'a str {
        &self.table.identity.entity_class_name
    }

    /// Whether any field is a `java.util.Date`.
    pub fn uses_date(&self) -> bool {
        self.table.uses_type("Date")
    }

    /// Start an artifact: header, package declaration and a blank line.
    pub(crate) fn preamble(&self, subpackage: &str) -> CodeBuilder {
        CodeBuilder::java()
            .line(GENERATED_HEADER)
            .line(&format!("package {}.{};", self.package, subpackage))
            .blank()
    }

    /// `import <package>.<path>;`
    pub(crate) fn import(&self, path: &str) -> String {
        format!("import {}.{};", self.package, path)
    }
}

/// `private X create_X(String id)`: one populated entity.
pub(crate) fn single_fixture(b: CodeBuilder, view: &TableView<'_>) -> CodeBuilder {
    let class = view.class_name();
    let var = &view.identity().instance_variable_name;

    b.braced(&format!("private {class} create_{class}(String id)"), |b| {
        b.line(&format!("{class} {var} = new {class}();"))
            .line(&format!("{var}.setId(id);"))
            .each(view.ctx.setter_statements(var), |b, s| b.line(&s))
            .line(&format!("return {var};"))
    })
}

/// `private List<X> createMultiple_X(String id)`: ten entities with ids `id + i`.
pub(crate) fn multiple_fixture(b: CodeBuilder, view: &TableView<'_>) -> CodeBuilder {
    let class = view.class_name();
    let var = &view.identity().instance_variable_name;

    b.braced(
        &format!("private List<{class}> createMultiple_{class}(String id)"),
        |b| {
            b.line(&format!("List<{class}> list = new ArrayList<{class}>();"))
                .blank()
                .braced("for (int i = 0; i < 10; i++)", |b| {
                    b.line(&format!("{class} {var} = new {class}();"))
                        .line(&format!("{var}.setId(id + i);"))
                        .each(view.ctx.setter_statements(var), |b, s| b.line(&s))
                        .line(&format!("list.add({var});"))
                })
                .blank()
                .line("return list;")
        },
    )
}

/// `try { body } catch (<exception> e) { handler }`
pub(crate) fn try_catch<F, G>(b: CodeBuilder, body: F, exception: &str, handler: G) -> CodeBuilder
where
    F: FnOnce(CodeBuilder) -> CodeBuilder,
    G: FnOnce(CodeBuilder) -> CodeBuilder,
{
    let b = b.block_with_close("try {", &format!("}} catch ({exception} e) {{"), body);
    handler(b.indent()).dedent().line("}")
}
