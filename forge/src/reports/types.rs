//! Types command report data structures.

use super::output::{Output, Report};

#[derive(Debug)]
pub struct TypesReport {
    pub rows: Vec<TypeRow>,
}

/// One storage type with its Java type and fixture literal.
#[derive(Debug)]
pub struct TypeRow {
    pub storage_type: &'static str,
    pub target_type: &'static str,
    pub fixture: String,
}

impl Report for TypesReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("{:<10} {:<8} {}", "STORAGE", "JAVA", "FIXTURE"));
        for row in &self.rows {
            out.preformatted(&format!(
                "{:<10} {:<8} {}",
                row.storage_type, row.target_type, row.fixture
            ));
        }
    }
}
