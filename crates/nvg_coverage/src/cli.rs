use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::generate::{GenerateArgs, run_generate, run_list};

#[derive(Debug, Parser)]
#[command(
    name = "nvg_coverage",
    about = "Generate one NanoVG test program per API function variant, plus a runner script",
    version
)]
pub struct Cli {
    /// Defaults to `generate` with default options.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write test programs, the runner script and the manifest.
    Generate(GenerateArgs),

    /// Print registry functions with category and variant count.
    List,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or_else(|| Commands::Generate(GenerateArgs::default())) {
        Commands::Generate(args) => run_generate(args),
        Commands::List => run_list(),
    }
}
