use std::path::{Path, PathBuf};

use cqlforge_core::GeneratedFile;

use super::TableView;
use crate::context::accessor_pair;

/// The JPA entity class: `main/domain/X.java`.
pub struct Entity<'a> {
    view: TableView<'a>,
}

impl<'a> Entity<'a> {
    pub fn new(view: TableView<'a>) -> Self {
        Self { view }
    }
}

impl GeneratedFile for Entity<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("main")
            .join("domain")
            .join(format!("{}.java", self.view.class_name()))
    }

    fn render(&self) -> String {
        let view = &self.view;

        view.preamble("domain")
            .when(view.uses_date(), |b| b.line("import java.util.Date;").blank())
            .line("import javax.persistence.Column;")
            .line("import javax.persistence.Entity;")
            .line("import javax.persistence.Id;")
            .blank()
            .line("@Entity")
            .braced(
                &format!("public class {} extends DomainBase", view.class_name()),
                |b| {
                    b.blank()
                        .line("@Id")
                        .line("private String id;")
                        .each(view.ctx.field_declarations(), |b, decl| b.blank().lines(decl))
                        .blank()
                        .lines(&accessor_pair("String", "id", "Id"))
                        .each(view.ctx.accessor_pairs(), |b, pair| b.blank().lines(pair))
                },
            )
            .build()
    }
}
