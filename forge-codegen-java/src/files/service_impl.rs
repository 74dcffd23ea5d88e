use std::path::{Path, PathBuf};

use cqlforge_core::GeneratedFile;

use super::TableView;

/// The service implementation: `main/service/impl/XServiceImpl.java`.
///
/// Every operation delegates to the autowired DAO.
pub struct ServiceImpl<'a> {
    view: TableView<'a>,
}

impl<'a> ServiceImpl<'a> {
    pub fn new(view: TableView<'a>) -> Self {
        Self { view }
    }
}

/// One delegating method.
struct Delegate {
    returns: String,
    signature: String,
    call: &'static str,
}

fn delegates(class: &str) -> Vec<Delegate> {
    let method = |returns: &str, signature: String, call| Delegate {
        returns: returns.to_string(),
        signature,
        call,
    };
    let list = format!("List<{class}>");
    let list = list.as_str();

    vec![
        method(class, "get(String id)".into(), "get(id)"),
        method(list, "getAll()".into(), "getAll()"),
        method(list, "get(Collection<String> ids)".into(), "get(ids)"),
        method("void", format!("save({class} entity)"), "save(entity)"),
        method("void", format!("save(Collection<{class}> entities)"), "save(entities)"),
        method("void", format!("delete({class} entity)"), "delete(entity)"),
        method("void", "deleteById(String id)".into(), "deleteById(id)"),
        method("void", "deleteByIds(Collection<String> ids)".into(), "deleteByIds(ids)"),
        method("void", format!("delete(Collection<{class}> entities)"), "delete(entities)"),
        method(list, "find(String cql)".into(), "find(cql)"),
        method("void", "createStorage(Map<String, Object> options)".into(), "createStorage(options)"),
        method("void", "deleteStorage()".into(), "deleteStorage()"),
        method("void", "truncate()".into(), "truncate()"),
    ]
}

impl GeneratedFile for ServiceImpl<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("main")
            .join("service")
            .join("impl")
            .join(format!("{}.java", self.view.identity().service_impl_name))
    }

    fn render(&self) -> String {
        let view = &self.view;
        let identity = view.identity();
        let class = &identity.entity_class_name;

        view.preamble("service.impl")
            .line("import java.util.Collection;")
            .line("import java.util.List;")
            .line("import java.util.Map;")
            .blank()
            .line("import org.springframework.beans.factory.annotation.Autowired;")
            .line("import org.springframework.stereotype.Service;")
            .blank()
            .line(&view.import(&format!("dao.{}", identity.dao_interface_name)))
            .line(&view.import(&format!("domain.{class}")))
            .line(&view.import(&format!("service.{}", identity.service_interface_name)))
            .blank()
            .line("@Service")
            .braced(
                &format!(
                    "public class {} implements {}",
                    identity.service_impl_name, identity.service_interface_name
                ),
                |b| {
                    b.blank()
                        .line("@Autowired")
                        .line(&format!("{} dao;", identity.dao_interface_name))
                        .each(delegates(class), |b, d| {
                            let body = if d.returns == "void" {
                                format!("dao.{};", d.call)
                            } else {
                                format!("return dao.{};", d.call)
                            };
                            b.blank()
                                .line("@Override")
                                .braced(&format!("public {} {}", d.returns, d.signature), |b| {
                                    b.line(&body)
                                })
                        })
                },
            )
            .build()
    }
}
