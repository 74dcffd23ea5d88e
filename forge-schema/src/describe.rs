//! Table descriptions as reported by a cluster, and their statement rendering.
//!
//! A keyspace description lists each table with its fully qualified validator
//! classes. Rendering produces the table statement format the parser reads,
//! one `<table>.db` source per table.
//!
//! ```toml
//! [[tables]]
//! name = "widget"
//! key_validator = "org.apache.cassandra.db.marshal.UTF8Type"
//! columns = [
//!     { name = "color", validator = "org.apache.cassandra.db.marshal.UTF8Type" },
//!     { name = "price", validator = "org.apache.cassandra.db.marshal.DecimalType" },
//! ]
//! ```

use std::path::Path;

use cqlforge_core::File;
use serde::Deserialize;

use crate::{Error, Result, SourceContext};

/// Every table of one keyspace.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyspaceDescription {
    #[serde(default)]
    pub tables: Vec<TableDescription>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableDescription {
    pub name: String,
    pub key_validator: String,
    #[serde(default)]
    pub columns: Vec<ColumnDescription>,
    #[serde(default)]
    pub properties: StorageProperties,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnDescription {
    pub name: String,
    pub validator: String,
}

/// Table options written after the column list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageProperties {
    pub bloom_filter_fp_chance: f64,
    pub caching: String,
    pub comment: String,
    pub dc_local_read_repair_chance: f64,
    pub gc_grace_seconds: u32,
    pub read_repair_chance: f64,
    pub replicate_on_write: bool,
    pub populate_io_cache_on_flush: bool,
    pub compaction_strategy: String,
    pub compression_key: String,
    pub compression_value: String,
}

impl Default for StorageProperties {
    fn default() -> Self {
        Self {
            bloom_filter_fp_chance: 0.01,
            caching: "KEYS_ONLY".to_string(),
            comment: String::new(),
            dc_local_read_repair_chance: 0.0,
            gc_grace_seconds: 864000,
            read_repair_chance: 0.1,
            replicate_on_write: true,
            populate_io_cache_on_flush: false,
            compaction_strategy: "org.apache.cassandra.db.compaction.SizeTieredCompactionStrategy"
                .to_string(),
            compression_key: "sstable_compression".to_string(),
            compression_value: "org.apache.cassandra.io.compress.SnappyCompressor".to_string(),
        }
    }
}

/// Shorten a fully qualified validator, strategy or compressor class name.
///
/// Unrecognized names produce a marker string rather than an error. A column
/// rendered with the marker no longer reduces to a name/type pair, so the
/// parser records it as a skipped clause.
pub fn shorthand(longhand: &str) -> String {
    let short = match longhand {
        "org.apache.cassandra.db.marshal.UTF8Type" => "text",
        "org.apache.cassandra.db.marshal.DecimalType" => "decimal",
        "org.apache.cassandra.db.marshal.LongType" => "bigint",
        "org.apache.cassandra.db.marshal.DateType" => "timestamp",
        "org.apache.cassandra.db.marshal.BooleanType" => "boolean",
        "org.apache.cassandra.db.compaction.SizeTieredCompactionStrategy" => {
            "SizeTieredCompactionStrategy"
        }
        "org.apache.cassandra.io.compress.SnappyCompressor" => "SnappyCompressor",
        _ => return format!("longhand {longhand} not recognized"),
    };
    short.to_string()
}

impl KeyspaceDescription {
    /// Parse a keyspace description with a custom filename for error reporting.
    pub fn parse_str(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SourceContext::new(content, filename).toml_error(e))
    }

    /// Load a keyspace description file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse_str(&content, &path.display().to_string())
    }

    /// One schema source per table.
    pub fn files(&self) -> Vec<File> {
        self.tables.iter().map(TableDescription::to_file).collect()
    }
}

impl TableDescription {
    /// Name of the schema source this table renders to.
    pub fn file_name(&self) -> String {
        format!("{}.db", self.name)
    }

    /// Render the table statement.
    pub fn render_statement(&self) -> String {
        let props = &self.properties;
        let mut lines = vec![
            format!("CREATE TABLE {} (", self.name),
            format!("key {} PRIMARY KEY,", shorthand(&self.key_validator)),
        ];

        let last = self.columns.len().saturating_sub(1);
        lines.extend(self.columns.iter().enumerate().map(|(i, column)| {
            let sep = if i == last { "" } else { "," };
            format!("\"{}\" {}{sep}", column.name, shorthand(&column.validator))
        }));

        lines.extend([
            ") WITH COMPACT STORAGE AND".to_string(),
            format!("bloom_filter_fp_chance={:?} AND", props.bloom_filter_fp_chance),
            format!("caching='{}' AND", props.caching),
            format!("comment='{}' AND", props.comment),
            format!("dcLocalReadRepairChance={:?} AND", props.dc_local_read_repair_chance),
            format!("gc_grace_seconds={} AND", props.gc_grace_seconds),
            format!("read_repair_chance={:?} AND", props.read_repair_chance),
            format!("replicate_on_write='{}' AND", props.replicate_on_write),
            format!("populate_io_cache_flush='{}' AND", props.populate_io_cache_on_flush),
            format!("compaction={{'class': '{}'}} AND", shorthand(&props.compaction_strategy)),
            format!(
                "compression={{'{}': '{}'}};",
                props.compression_key,
                shorthand(&props.compression_value)
            ),
        ]);

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// Rendered statement as a schema source file.
    pub fn to_file(&self) -> File {
        File::new(self.file_name(), self.render_statement())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UTF8: &str = "org.apache.cassandra.db.marshal.UTF8Type";
    const DECIMAL: &str = "org.apache.cassandra.db.marshal.DecimalType";

    fn widget() -> TableDescription {
        TableDescription {
            name: "widget".to_string(),
            key_validator: UTF8.to_string(),
            columns: vec![
                ColumnDescription {
                    name: "color".to_string(),
                    validator: UTF8.to_string(),
                },
                ColumnDescription {
                    name: "price".to_string(),
                    validator: DECIMAL.to_string(),
                },
            ],
            properties: StorageProperties::default(),
        }
    }

    #[test]
    fn test_shorthand() {
        assert_eq!(shorthand(UTF8), "text");
        assert_eq!(shorthand(DECIMAL), "decimal");
        assert_eq!(shorthand("org.apache.cassandra.db.marshal.LongType"), "bigint");
        assert_eq!(shorthand("org.apache.cassandra.db.marshal.DateType"), "timestamp");
        assert_eq!(shorthand("org.apache.cassandra.db.marshal.BooleanType"), "boolean");
        assert_eq!(
            shorthand("org.apache.cassandra.io.compress.SnappyCompressor"),
            "SnappyCompressor"
        );
        assert_eq!(
            shorthand("org.apache.cassandra.db.marshal.Int32Type"),
            "longhand org.apache.cassandra.db.marshal.Int32Type not recognized"
        );
    }

    #[test]
    fn test_render_statement() {
        let expected = "\
CREATE TABLE widget (
key text PRIMARY KEY,
\"color\" text,
\"price\" decimal
) WITH COMPACT STORAGE AND
bloom_filter_fp_chance=0.01 AND
caching='KEYS_ONLY' AND
comment='' AND
dcLocalReadRepairChance=0.0 AND
gc_grace_seconds=864000 AND
read_repair_chance=0.1 AND
replicate_on_write='true' AND
populate_io_cache_flush='false' AND
compaction={'class': 'SizeTieredCompactionStrategy'} AND
compression={'sstable_compression': 'SnappyCompressor'};
";
        assert_eq!(widget().render_statement(), expected);
    }

    #[test]
    fn test_to_file() {
        let file = widget().to_file();
        assert_eq!(file.path(), Path::new("widget.db"));
        assert!(file.content().starts_with("CREATE TABLE widget ("));
    }

    #[test]
    fn test_parse_description() {
        let description = KeyspaceDescription::parse_str(
            r#"
[[tables]]
name = "widget"
key_validator = "org.apache.cassandra.db.marshal.UTF8Type"
columns = [
    { name = "color", validator = "org.apache.cassandra.db.marshal.UTF8Type" },
    { name = "price", validator = "org.apache.cassandra.db.marshal.DecimalType" },
]

[[tables]]
name = "account"
key_validator = "org.apache.cassandra.db.marshal.LongType"

[tables.properties]
comment = "accounts"
gc_grace_seconds = 3600
"#,
            "keyspace.toml",
        )
        .unwrap();

        assert_eq!(description.tables.len(), 2);
        assert_eq!(description.tables[0], widget());

        let account = &description.tables[1];
        assert!(account.columns.is_empty());
        assert_eq!(account.properties.comment, "accounts");
        assert_eq!(account.properties.gc_grace_seconds, 3600);
        assert_eq!(account.properties.caching, "KEYS_ONLY");

        let files = description.files();
        let names: Vec<&Path> = files.iter().map(|f| f.path()).collect();
        assert_eq!(names, [Path::new("widget.db"), Path::new("account.db")]);
    }

    #[test]
    fn test_parse_description_error() {
        let err = KeyspaceDescription::parse_str("[[tables]]\nname = 1\n", "keyspace.toml")
            .unwrap_err();
        assert!(matches!(*err, Error::Toml { .. }));
    }
}
