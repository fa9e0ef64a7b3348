use anyhow::Result;
use arpeggio::cli;
use clap::{Parser, Subcommand};

fn main() -> Result<()> {
    let cli = Cli::parse();
    arpeggio::init_tracing();
    match cli.command {
        Command::Check(args) => args.run(),
        Command::Status(args) => args.run(),
        Command::Eval(args) => args.run(),
    }
}

#[derive(Parser)]
#[command(name = "arpeggio", about = "Joint kinematics tooling for Arpeggio")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a robot configuration and set up its kinematics.
    Check(cli::check::CheckArgs),
    /// Print the kinematics status as JSON, optionally after homing.
    Status(cli::status::StatusArgs),
    /// Evaluate every joint stepper along a single move.
    Eval(cli::eval::EvalArgs),
}
