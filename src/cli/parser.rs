//! Command-line parsing for the interactive session.

use std::str::FromStr;

/// Every command the assistant understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Help,
    Exit,
    Unknown,
}

impl FromStr for Command {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "help" => Command::Help,
            "exit" | "close" => Command::Exit,
            _ => Command::Unknown,
        })
    }
}

/// Split a line into its command and positional arguments.
///
/// Returns `None` for blank input.
pub fn parse_input(line: &str) -> Option<(Command, Vec<String>)> {
    let mut words = line.split_whitespace();
    let command = words.next()?;
    let command = command.parse().unwrap_or(Command::Unknown);
    Some((command, words.map(str::to_string).collect()))
}
