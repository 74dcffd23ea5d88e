use std::path::{Path, PathBuf};

use cqlforge_core::GeneratedFile;

use super::TableView;

/// The DAO implementation: `main/dao/impl/XDaoImpl.java`.
///
/// `init()` binds an entity manager for the entity class to the shared
/// keyspace once the bean is constructed.
pub struct DaoImpl<'a> {
    view: TableView<'a>,
}

impl<'a> DaoImpl<'a> {
    pub fn new(view: TableView<'a>) -> Self {
        Self { view }
    }
}

impl GeneratedFile for DaoImpl<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("main")
            .join("dao")
            .join("impl")
            .join(format!("{}.java", self.view.identity().dao_impl_name))
    }

    fn render(&self) -> String {
        let view = &self.view;
        let identity = view.identity();
        let class = &identity.entity_class_name;

        view.preamble("dao.impl")
            .line("import javax.annotation.PostConstruct;")
            .blank()
            .line("import org.springframework.stereotype.Repository;")
            .blank()
            .line("import com.netflix.astyanax.entitystore.DefaultEntityManager;")
            .line(&view.import(&format!("dao.{}", identity.dao_interface_name)))
            .line(&view.import(&format!("domain.{class}")))
            .blank()
            .line("@Repository")
            .braced(
                &format!(
                    "public class {} extends AbstractAstyanaxDaoImpl<{class}, String> implements {}",
                    identity.dao_impl_name, identity.dao_interface_name
                ),
                |b| {
                    b.blank()
                        .line("@Override")
                        .line("@PostConstruct")
                        .braced("public void init()", |b| {
                            b.line(&format!(
                                "entityManager = new DefaultEntityManager.Builder<{class}, String>()"
                            ))
                            .indent()
                            .indent()
                            .line(&format!(".withEntityType({class}.class)"))
                            .line(".withKeyspace(cassandraServer.getKeyspace())")
                            .line(".build();")
                            .dedent()
                            .dedent()
                        })
                },
            )
            .build()
    }
}
