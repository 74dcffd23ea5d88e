//! Bake operation - code generation from table statements.

use std::{collections::HashMap, path::Path};

use cqlforge_codegen::{
    language::{LanguageCodegen, PreviewFile, write_all},
    pipeline::{Pipeline, SnapshotPlugin},
};
use cqlforge_codegen_java::Generator;
use cqlforge_schema::TableSchema;
use eyre::{Context, Result, bail};
use tracing::{debug, info};

use crate::reports::{BakeReport, GenerationResult, PreviewResult, TableSummary, WrittenResult};

/// Options for the bake operation.
pub struct BakeOptions<'a> {
    /// Root directory for generated sources.
    pub output_dir: &'a Path,
    /// Java package root.
    pub package: &'a str,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether to output debug snapshots.
    pub visualize: bool,
}

/// Execute the bake operation.
///
/// Every table is compiled and rendered before the first file is written, so
/// a failure in any table leaves the output directory untouched. Two tables
/// that resolve to the same class would write the same paths and fail the run.
pub fn bake(tables: Vec<TableSchema>, opts: BakeOptions) -> Result<BakeReport> {
    let debug_dir = opts.output_dir.join(".cqlforge/debug");
    let mut pipeline = Pipeline::new();
    if opts.visualize {
        pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(&debug_dir));
    }

    let mut warnings = Vec::new();
    let mut summaries = Vec::new();
    let mut files = Vec::new();
    let mut class_sources: HashMap<String, String> = HashMap::new();

    for schema in tables {
        let source = schema.source.clone();
        debug!(%source, "compiling table");

        let ctx = pipeline
            .run(schema)
            .wrap_err_with(|| format!("failed to compile {source}"))?;

        warnings.extend(
            ctx.diagnostics
                .iter()
                .filter(|d| d.severity.is_warning())
                .map(|d| format!("{source}: {}", d.message)),
        );

        let generator = Generator::from_context(ctx, opts.package)
            .wrap_err_with(|| format!("failed to generate {source}"))?;
        let class_name = generator.table().identity.entity_class_name.clone();
        if let Some(previous) = class_sources.insert(class_name.clone(), source.clone()) {
            bail!("{previous} and {source} both generate class {class_name}");
        }

        let rendered = generator.files();
        summaries.push(TableSummary {
            source,
            class_name,
            files: rendered.len(),
        });
        files.extend(rendered);
    }

    let result = if opts.dry_run {
        let files = files.iter().map(PreviewFile::from).collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let written = write_all(&files, opts.output_dir).wrap_err("failed to write artifacts")?;
        for table in &summaries {
            info!(class = %table.class_name, files = table.files, "wrote table artifacts");
        }

        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: written.len(),
            debug_dir: opts.visualize.then_some(debug_dir),
        })
    };

    Ok(BakeReport {
        package: opts.package.to_string(),
        warnings,
        tables: summaries,
        result,
    })
}
