use std::path::{Path, PathBuf};

use cqlforge_core::GeneratedFile;

use super::TableView;

/// The DAO interface: `main/dao/IXDao.java`.
pub struct DaoInterface<'a> {
    view: TableView<'a>,
}

impl<'a> DaoInterface<'a> {
    pub fn new(view: TableView<'a>) -> Self {
        Self { view }
    }
}

impl GeneratedFile for DaoInterface<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("main")
            .join("dao")
            .join(format!("{}.java", self.view.identity().dao_interface_name))
    }

    fn render(&self) -> String {
        let view = &self.view;
        let identity = view.identity();

        view.preamble("dao")
            .line(&view.import(&format!("domain.{}", identity.entity_class_name)))
            .blank()
            .braced(
                &format!(
                    "public interface {} extends IAbstractDao<{}, String>",
                    identity.dao_interface_name, identity.entity_class_name
                ),
                |b| b,
            )
            .build()
    }
}
