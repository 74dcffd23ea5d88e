use std::path::{Path, PathBuf};

use cqlforge_core::GeneratedFile;

use super::TableView;

/// The service interface: `main/service/IXService.java`.
pub struct ServiceInterface<'a> {
    view: TableView<'a>,
}

impl<'a> ServiceInterface<'a> {
    pub fn new(view: TableView<'a>) -> Self {
        Self { view }
    }
}

impl GeneratedFile for ServiceInterface<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("main")
            .join("service")
            .join(format!("{}.java", self.view.identity().service_interface_name))
    }

    fn render(&self) -> String {
        let view = &self.view;
        let identity = view.identity();

        view.preamble("service")
            .line("import org.springframework.stereotype.Service;")
            .blank()
            .line(&view.import(&format!("domain.{}", identity.entity_class_name)))
            .blank()
            .line("@Service")
            .braced(
                &format!(
                    "public interface {} extends IAbstractService<{}, String>",
                    identity.service_interface_name, identity.entity_class_name
                ),
                |b| b,
            )
            .build()
    }
}
