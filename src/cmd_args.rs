use std::ffi::OsString;

pub use clap::Parser;
use clap::Subcommand;

use crate::config::DEFAULT_COUNTDOWN_START;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None, disable_help_subcommand = true)]
struct ClapArgs {
    #[command(subcommand)]
    command: Command,
}

/// The chorus command surface.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the countdown sequence from COUNT down to zero
    Countdown {
        /// Starting value for the sequence
        #[clap(default_value_t = DEFAULT_COUNTDOWN_START)]
        count: u32,
    },
    /// Show the table of available commands
    Help,
    /// Print the version string
    Version,
    /// Print a hello world greeting
    Hello,
    /// Print a goodbye world message
    Goodbye,
    /// Greet a specified person by name
    Greet {
        /// Name of the person to greet
        name: String,
    },
    /// Show help and list all available commands
    Chorus,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    command: Command,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        let args = ClapArgs::parse();
        Self {
            command: args.command,
        }
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = ClapArgs::parse_from(itr);
        Self {
            command: args.command,
        }
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}
