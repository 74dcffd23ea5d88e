//! Behavior of the generated artifact set as a whole.

use std::fs;

use cqlforge_codegen::{language::write_all, pipeline::Pipeline};
use cqlforge_codegen_java::{GENERATED_HEADER, Generator, LanguageCodegen};
use cqlforge_core::File;
use cqlforge_schema::parse_statement;
use tempfile::TempDir;

fn generator(statement: &str, source: &str) -> Generator {
    let schema = parse_statement(statement, source).unwrap();
    let ctx = Pipeline::new().run(schema).unwrap();
    Generator::from_context(ctx, "com.example").unwrap()
}

fn content<'a>(files: &'a [File], path: &str) -> &'a str {
    files
        .iter()
        .find(|f| f.path().to_str() == Some(path))
        .map(File::content)
        .unwrap_or_else(|| panic!("{path} not generated"))
}

/// Field names declared by the entity, skipping the id.
fn declared_fields(entity: &str) -> Vec<String> {
    entity
        .lines()
        .map(str::trim)
        .filter(|l| l.starts_with("private ") && l.ends_with(';') && l != &"private String id;")
        .filter_map(|l| l.trim_end_matches(';').rsplit(' ').next())
        .map(str::to_string)
        .collect()
}

/// Field names populated by the first fixture in a test, skipping the id.
fn fixture_fields(test: &str, receiver: &str) -> Vec<String> {
    let prefix = format!("{receiver}.set");
    let mut fields = Vec::new();
    for line in test.lines().map(str::trim) {
        let Some(rest) = line.strip_prefix(&prefix) else {
            continue;
        };
        if rest.starts_with("Id(") {
            // The id setter opens each fixture; a second one starts the next fixture.
            if !fields.is_empty() {
                break;
            }
            continue;
        }
        let suffix = rest.split('(').next().unwrap();
        let mut chars = suffix.chars();
        let first = chars.next().unwrap().to_lowercase();
        fields.push(first.chain(chars).collect());
    }
    fields
}

#[test]
fn test_eight_artifacts_in_fixed_layout() {
    let files = generator(
        "CREATE TABLE widget (key text PRIMARY KEY, color text, price decimal)",
        "widget.db",
    )
    .synthesize();

    let paths: Vec<_> = files
        .iter()
        .map(|f| f.path().to_str().unwrap().to_string())
        .collect();
    assert_eq!(
        paths,
        [
            "main/domain/Widget.java",
            "main/dao/IWidgetDao.java",
            "main/dao/impl/WidgetDaoImpl.java",
            "main/service/IWidgetService.java",
            "main/service/impl/WidgetServiceImpl.java",
            "test/domain/WidgetDomainTest.java",
            "test/dao/WidgetDaoTest.java",
            "test/service/WidgetServiceTest.java",
        ]
    );
    assert!(files.iter().all(|f| f.content().starts_with(GENERATED_HEADER)));
}

#[test]
fn test_widget_artifacts() {
    let files = generator(
        "CREATE TABLE widget (key text PRIMARY KEY, color text, price decimal)",
        "widget.db",
    )
    .synthesize();

    let entity = content(&files, "main/domain/Widget.java");
    assert!(entity.contains("private String color;"));
    assert!(entity.contains("private double price;"));
    assert!(entity.contains("public String getColor()"));
    assert!(entity.contains("public void setColor(String color)"));
    assert!(!entity.contains("import java.util.Date;"));

    let dao_impl = content(&files, "main/dao/impl/WidgetDaoImpl.java");
    assert!(dao_impl.contains("implements IWidgetDao"));

    let service_impl = content(&files, "main/service/impl/WidgetServiceImpl.java");
    assert!(service_impl.contains("implements IWidgetService"));
    assert!(service_impl.contains("IWidgetDao dao;"));

    for path in [
        "test/domain/WidgetDomainTest.java",
        "test/dao/WidgetDaoTest.java",
        "test/service/WidgetServiceTest.java",
    ] {
        let test = content(&files, path);
        assert!(test.contains("widget.setColor(\"cOLOR\");"), "{path}");
        assert!(test.contains("widget.setPrice(1.1);"), "{path}");
    }
}

#[test]
fn test_fixtures_populate_every_declared_field_in_order() {
    let files = generator(
        "CREATE TABLE order_item (\n\
         key text PRIMARY KEY,\n\
         \"unit-price\" decimal,\n\
         quantity bigint,\n\
         created timestamp,\n\
         gift boolean,\n\
         sku text\n\
         )",
        "order_item.db",
    )
    .synthesize();

    let entity = content(&files, "main/domain/OrderItem.java");
    let declared = declared_fields(entity);
    assert_eq!(declared, ["created", "gift", "quantity", "sku", "unitprice"]);

    for path in [
        "test/domain/OrderItemDomainTest.java",
        "test/dao/OrderItemDaoTest.java",
        "test/service/OrderItemServiceTest.java",
    ] {
        assert_eq!(fixture_fields(content(&files, path), "orderItem"), declared, "{path}");
    }
}

#[test]
fn test_date_import_only_when_used() {
    let files = generator(
        "CREATE TABLE event (key text PRIMARY KEY, created timestamp)",
        "event.db",
    )
    .synthesize();

    let entity = content(&files, "main/domain/Event.java");
    assert!(entity.contains("import java.util.Date;"));
    assert!(entity.contains("private Date created;"));
    assert!(content(&files, "test/dao/EventDaoTest.java").contains("event.setCreated(new Date());"));
}

#[test]
fn test_tables_do_not_share_fields() {
    let widget_alone = generator("CREATE TABLE widget (color text)", "widget.db").synthesize();

    let account = generator("CREATE TABLE account (balance decimal)", "account.db").synthesize();
    let widget_after = generator("CREATE TABLE widget (color text)", "widget.db").synthesize();

    for (alone, after) in widget_alone.iter().zip(&widget_after) {
        assert_eq!(alone.content(), after.content());
        assert!(!after.content().contains("balance"));
    }
    for file in &account {
        assert!(!file.content().contains("color"), "{}", file.path().display());
    }
}

#[test]
fn test_files_write_under_output_dir() {
    let temp = TempDir::new().unwrap();
    let files = generator("CREATE TABLE widget (color text)", "widget.db").files();
    let written = write_all(&files, temp.path()).unwrap();

    assert_eq!(written.len(), 8);
    assert!(written.iter().all(|p| p.starts_with(temp.path())));

    let written = fs::read_to_string(temp.path().join("main/dao/IWidgetDao.java")).unwrap();
    assert!(written.contains("public interface IWidgetDao"));
}
