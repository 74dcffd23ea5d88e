use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct TypesCommand {}

impl TypesCommand {
    /// Run the types command
    pub fn run(&self) -> Result<()> {
        ops::types().render(&mut TerminalOutput::new());
        Ok(())
    }
}
