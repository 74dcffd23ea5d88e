use std::path::PathBuf;

use clap::Args;
use cqlforge_schema::{CONFIG_FILE, ForgeConfig};
use eyre::Result;

use super::{UnwrapOrExit, bake::missing_path};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Directory of table statement files (defaults to [paths].schema in cqlforge.toml)
    pub schema_dir: Option<PathBuf>,

    /// Path to cqlforge.toml
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let schema_dir = match &self.schema_dir {
            Some(dir) => dir.clone(),
            None => ForgeConfig::load_or_default(&self.config)
                .unwrap_or_exit()
                .paths
                .schema
                .ok_or_else(|| missing_path("schema", &self.config))?,
        };

        let tables = ops::load_tables(&schema_dir).unwrap_or_exit();
        let report = ops::check(tables, &schema_dir)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
