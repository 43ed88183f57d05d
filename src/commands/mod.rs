//! # Commands Module
//!
//! The chorus command implementations. Each command is a pure function
//! returning its output; `run` is the only place anything is printed.

pub mod countdown;
pub mod greeting;
pub mod help;
pub mod version;

// Re-export main types for convenience
pub use countdown::countdown;
pub use greeting::{goodbye, greet, hello};
pub use help::{help, CommandInfo, COMMANDS};
pub use version::version;

use anyhow::Result;

use crate::cmd_args::{Command, CommandLineArgs};

/// Execute the parsed command and print its output to standard output.
pub fn run(args: &CommandLineArgs) -> Result<()> {
    tracing::debug!(command = ?args.command(), "dispatching command");

    match args.command() {
        Command::Countdown { count } => {
            println!("{}", countdown::render(&countdown::countdown(*count)));
        }
        // The chorus command is the table's own name for the help listing
        Command::Help | Command::Chorus => println!("{}", help()),
        Command::Version => println!("{}", version()),
        Command::Hello => println!("{}", hello()),
        Command::Goodbye => println!("{}", goodbye()),
        Command::Greet { name } => println!("{}", greet(name)),
    }

    Ok(())
}
