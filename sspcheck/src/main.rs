mod error;
mod validate;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an OSCAL System Security Plan against a compiled ruleset.
    Validate(validate::Validate),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Validate(validate) => {
            validate.run()?;
        }
    }
    Ok(())
}
