use std::path::PathBuf;

use clap::Args;
use cqlforge_schema::describe::KeyspaceDescription;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ExportCommand {
    /// Keyspace description file (TOML)
    pub description: PathBuf,

    /// Directory that receives one <table>.db statement per table
    pub out_dir: PathBuf,
}

impl ExportCommand {
    /// Run the export command
    pub fn run(&self) -> Result<()> {
        let description = KeyspaceDescription::load(&self.description).unwrap_or_exit();
        let report = ops::export(&description, &self.out_dir)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
