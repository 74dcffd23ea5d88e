use std::path::{Path, PathBuf};

use clap::Args;
use cqlforge_schema::{CONFIG_FILE, ForgeConfig};
use eyre::{Result, eyre};

use super::UnwrapOrExit;
use crate::{
    ops::{self, BakeOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BakeCommand {
    /// Directory of table statement files (defaults to [paths].schema in cqlforge.toml)
    pub schema_dir: Option<PathBuf>,

    /// Root directory for generated sources (defaults to [paths].output in cqlforge.toml)
    pub output_dir: Option<PathBuf>,

    /// Java package root (overrides cqlforge.toml)
    #[arg(short, long)]
    pub package: Option<String>,

    /// Path to cqlforge.toml
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Write pipeline snapshots to <OUTPUT_DIR>/.cqlforge/debug
    #[arg(long)]
    pub visualize: bool,
}

impl BakeCommand {
    /// Run the bake command
    pub fn run(&self) -> Result<()> {
        let config = ForgeConfig::load_or_default(&self.config).unwrap_or_exit();

        let schema_dir = self
            .schema_dir
            .clone()
            .or(config.paths.schema)
            .ok_or_else(|| missing_path("schema", &self.config))?;
        let output_dir = self
            .output_dir
            .clone()
            .or(config.paths.output)
            .ok_or_else(|| missing_path("output", &self.config))?;
        let package = self.package.as_deref().unwrap_or(&config.project.package);

        let tables = ops::load_tables(&schema_dir).unwrap_or_exit();
        let report = ops::bake(
            tables,
            BakeOptions {
                output_dir: &output_dir,
                package,
                dry_run: self.dry_run,
                visualize: self.visualize,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}

pub(super) fn missing_path(kind: &str, config: &Path) -> eyre::Report {
    eyre!(
        "no {kind} directory given and no [paths].{kind} in {}",
        config.display()
    )
}
