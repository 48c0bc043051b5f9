//! CLI frontend for the Classic Traveller character generator.

mod commands;
mod error;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tvl",
    about = "Classic Traveller (1977) character generation",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a character: roll a name and characteristics, save to a file
    New {
        /// File to save the character to
        #[arg(short, long, default_value = "character.json")]
        file: PathBuf,

        /// Seed for the dice stream
        #[arg(short, long, default_value_t = 77)]
        seed: u64,
    },

    /// Run the career interactively against a saved character
    Run {
        /// File holding the character
        #[arg(short, long, default_value = "character.json")]
        file: PathBuf,
    },

    /// Print a saved character sheet
    Show {
        /// File holding the character
        #[arg(short, long, default_value = "character.json")]
        file: PathBuf,

        /// Also print the full career history
        #[arg(long)]
        history: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::New { file, seed } => commands::new::run(&file, seed),
        Commands::Run { file } => commands::run::run(&file),
        Commands::Show { file, history } => commands::show::run(&file, history),
    };
    if let Err(err) = result {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
