mod bake;
mod check;
mod export;
mod types;

use bake::BakeCommand;
use check::CheckCommand;
use clap::{Parser, Subcommand};
use eyre::Result;
use export::ExportCommand;
use types::TypesCommand;

/// Extension trait for exiting on schema errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for cqlforge_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "cqlforge")]
#[command(version)]
#[command(about = "Generate Java persistence layers from Cassandra table statements")]
pub(crate) struct Cli {
    /// Log pipeline progress at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Bake(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Types(cmd) => cmd.run(),
            Commands::Export(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate entity, DAO, service and test classes for every table
    Bake(BakeCommand),

    /// Parse, validate and lower every table without generating code
    Check(CheckCommand),

    /// List the supported storage types
    Types(TypesCommand),

    /// Render table statements from a keyspace description
    Export(ExportCommand),
}
