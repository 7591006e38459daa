use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    decay::{self, DecayArgs},
    roster::{self, RosterArgs},
    version::{self, VersionArgs},
};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "sm-sim", about = "Standard-Model particle catalogue and decay CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print catalogue counts for the reference roster.
    Roster(RosterArgs),
    /// Decay the unstable roster members and report channels and products.
    Decay(DecayArgs),
    /// Print the toolkit version.
    Version(VersionArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    match cli.command {
        Command::Roster(args) => roster::run(&args),
        Command::Decay(args) => decay::run(&args),
        Command::Version(args) => version::run(&args),
    }
}
