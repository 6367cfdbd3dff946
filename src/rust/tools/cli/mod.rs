// Parent `tools` module controls `cli` gating; avoid duplicating crate-level cfg here.
mod commands;
pub mod messages;
pub mod state;

use anyhow::Result;
use clap::{Parser, Subcommand};
use state::CliContext;

#[derive(Parser, Debug)]
#[command(name = "access")]
#[command(version, about = "Access – compiles a tree of Access sources into JavaScript output.")]
pub struct Cli {
    /// Print debug output
    #[arg(long, global = true, default_value_t = false)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile a source file or directory
    #[command(alias = "compile")]
    Build(commands::build::BuildCommand),
    /// List every file below a directory
    Scan(commands::scan::ScanCommand),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = CliContext::new(cli.debug);

    match cli.command {
        Commands::Build(command) => command.execute(&ctx)?,
        Commands::Scan(command) => command.execute(&ctx)?,
    }

    Ok(())
}
