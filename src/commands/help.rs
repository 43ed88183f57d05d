//! Help listing for the fixed command table.

use crate::config::HELP_NAME_WIDTH;

/// A single entry in the command table: a command name and what it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// The fixed table of available commands.
pub static COMMANDS: [CommandInfo; 4] = [
    CommandInfo {
        name: "hello",
        description: "Print a hello world greeting",
    },
    CommandInfo {
        name: "goodbye",
        description: "Print a goodbye world message",
    },
    CommandInfo {
        name: "greet",
        description: "Greet a specified person by name",
    },
    CommandInfo {
        name: "chorus",
        description: "Show help and list all available commands",
    },
];

/// Format the command table: a header line, a blank line, then one row
/// per command with the name left-padded to a fixed column width.
pub fn help() -> String {
    let mut lines = vec!["Available commands:".to_string(), String::new()];
    for cmd in &COMMANDS {
        lines.push(format!(
            "  {:<width$} {}",
            cmd.name,
            cmd.description,
            width = HELP_NAME_WIDTH
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_has_header() {
        assert!(help().contains("Available commands:"));
    }

    #[test]
    fn test_help_lists_every_command() {
        let output = help();
        for cmd in &COMMANDS {
            assert!(output.contains(cmd.name));
            assert!(output.contains(cmd.description));
        }
    }

    #[test]
    fn test_command_table_names() {
        let names: Vec<&str> = COMMANDS.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["hello", "goodbye", "greet", "chorus"]);
    }

    #[test]
    fn test_command_table_entries_non_empty() {
        for cmd in &COMMANDS {
            assert!(!cmd.name.is_empty());
            assert!(!cmd.description.is_empty());
        }
    }

    #[test]
    fn test_help_row_layout() {
        let output = help();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Available commands:");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "  hello      Print a hello world greeting");
        assert_eq!(lines.len(), 2 + COMMANDS.len());
    }
}
