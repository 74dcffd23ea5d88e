use std::path::Path;

use cqlforge_codegen::{language::LanguageCodegen, pipeline::CompilationContext};
use cqlforge_core::{File, GeneratedFile};
use cqlforge_ir::TableIR;
use eyre::Result;
use tracing::debug;

use crate::{
    GenerationContext,
    files::{
        DaoImpl, DaoInterface, DaoTest, DomainTest, Entity, ServiceImpl, ServiceInterface,
        ServiceTest, TableView,
    },
};

/// Java generator for one lowered table.
#[derive(Debug, Clone)]
pub struct Generator {
    table: TableIR,
    package: String,
}

impl Generator {
    pub fn new(table: TableIR, package: impl Into<String>) -> Self {
        Self {
            table,
            package: package.into(),
        }
    }

    /// Take the lowered table out of a finished pipeline run.
    pub fn from_context(mut ctx: CompilationContext, package: impl Into<String>) -> Result<Self> {
        Ok(Self::new(ctx.take_ir()?, package))
    }

    pub fn table(&self) -> &TableIR {
        &self.table
    }

    /// Render all eight artifacts in memory.
    ///
    /// The accumulators live only for this call, so nothing carries over from
    /// one table to the next.
    pub fn synthesize(&self) -> Vec<File> {
        let ctx = GenerationContext::new(&self.table);
        let view = TableView {
            package: &self.package,
            table: &self.table,
            ctx: &ctx,
        };

        let files = vec![
            render(&Entity::new(view)),
            render(&DaoInterface::new(view)),
            render(&DaoImpl::new(view)),
            render(&ServiceInterface::new(view)),
            render(&ServiceImpl::new(view)),
            render(&DomainTest::new(view)),
            render(&DaoTest::new(view)),
            render(&ServiceTest::new(view)),
        ];

        debug!(
            table = %self.table.raw_table_name,
            files = files.len(),
            "synthesized java artifacts"
        );
        files
    }
}

fn render(artifact: &impl GeneratedFile) -> File {
    File::new(artifact.path(Path::new("")), artifact.render())
}

impl LanguageCodegen for Generator {
    fn files(&self) -> Vec<File> {
        self.synthesize()
    }
}
