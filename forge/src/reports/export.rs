//! Export command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

#[derive(Debug)]
pub struct ExportReport {
    /// Directory the statements were written to.
    pub out_dir: PathBuf,
    /// Written file names, relative to `out_dir`.
    pub written: Vec<String>,
}

impl Report for ExportReport {
    fn render(&self, out: &mut dyn Output) {
        out.section(&format!("Exported to {}", self.out_dir.display()));
        for file in &self.written {
            out.added_item(file);
        }
    }
}
