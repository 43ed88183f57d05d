//! # Chorus - A Toy Command Toolbox
//!
//! A tiny command-line utility bundling a handful of toy commands:
//! a countdown sequence generator, greetings, a command listing, and
//! version reporting.
//!
//! Every command is a pure, synchronous function; the binary entry point
//! only parses arguments and prints the result.

pub mod cmd_args;
pub mod commands;
pub mod config;

// Re-export main types for easy access
pub use commands::*;
