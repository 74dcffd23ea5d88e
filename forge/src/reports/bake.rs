//! Bake command report data structures.

use std::path::PathBuf;

use cqlforge_codegen::language::PreviewFile;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct BakeReport {
    /// Java package root the artifacts were generated into.
    pub package: String,

    /// Warning messages from pipeline, prefixed with their source.
    pub warnings: Vec<String>,

    /// One entry per compiled table, in source order.
    pub tables: Vec<TableSummary>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

#[derive(Debug)]
pub struct TableSummary {
    pub source: String,
    pub class_name: String,
    pub files: usize,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Number of files written.
    pub written: usize,
    /// Path to debug snapshots, if visualization was enabled.
    pub debug_dir: Option<PathBuf>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

impl Report for BakeReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl BakeReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        if let Some(debug_dir) = &written.debug_dir {
            out.key_value(
                "Pipeline snapshots written to",
                &debug_dir.display().to_string(),
            );
            out.newline();
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        out.section(&format!("Tables ({})", self.tables.len()));
        for table in &self.tables {
            out.added_item(&format!(
                "{} -> {}.{}",
                table.source, self.package, table.class_name
            ));
        }
        out.newline();

        out.key_value(
            "Generated",
            &format!(
                "{} files in {}",
                written.written,
                written.output_dir.display()
            ),
        );
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}
