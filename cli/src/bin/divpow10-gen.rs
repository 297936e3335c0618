use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use divpow10_gen::{
    commands::{GenerateCmd, ShowCmd, VerifyCmd},
    init_tracing, DIVPOW10_VERSION_MESSAGE,
};

#[derive(Parser)]
#[command(
    name = "divpow10-gen",
    version = DIVPOW10_VERSION_MESSAGE,
    about = "Reciprocal table generator for division by powers of ten",
    long_about = "Builds, verifies and inspects the table used to divide wide integers by 10^n \
                  through a multiply, shift and mask."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Generate(GenerateCmd),
    Verify(VerifyCmd),
    Show(ShowCmd),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Command::Generate(cmd) => {
            cmd.run().context("Error executing Generate command")?;
        }
        Command::Verify(cmd) => {
            cmd.run().context("Error executing Verify command")?;
        }
        Command::Show(cmd) => {
            cmd.run().context("Error executing Show command")?;
        }
    }

    Ok(())
}
