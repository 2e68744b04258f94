//! Interactive command definitions.
//!
//! Keywords are matched case-insensitively; arguments keep their case.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::Error;

/// A command entered at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Prompt for a new flight and insert it
    Add,
    /// Print every flight
    List,
    /// Print the flights served by a plane type, prompting for it if absent
    Find(Option<String>),
    /// Write flights to a file, or to the configured default file
    Save(Option<PathBuf>),
    /// Replace flights with the contents of a file, or of the configured default file
    Load(Option<PathBuf>),
    /// Print the command list
    Help,
    /// Leave the loop
    Exit,
    /// A blank line
    Empty,
}

impl Command {
    /// The command keyword.
    #[must_use]
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::List => "list",
            Self::Find(_) => "find",
            Self::Save(_) => "save",
            Self::Load(_) => "load",
            Self::Help => "help",
            Self::Exit => "exit",
            Self::Empty => "",
        }
    }
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Self::Empty);
        }

        let (keyword, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(keyword, rest)| (keyword, rest.trim()));
        let argument = (!rest.is_empty()).then(|| rest.to_string());

        match (keyword.to_lowercase().as_str(), argument) {
            ("add", None) => Ok(Self::Add),
            ("list", None) => Ok(Self::List),
            ("help", None) => Ok(Self::Help),
            ("exit", None) => Ok(Self::Exit),
            ("find", plane_type) => Ok(Self::Find(plane_type)),
            ("save", file) => Ok(Self::Save(file.map(PathBuf::from))),
            ("load", file) => Ok(Self::Load(file.map(PathBuf::from))),
            _ => Err(Error::unknown_command(line)),
        }
    }
}

/// Help text listing every command.
pub const HELP: &str = "\
Commands:

add - add a flight;
list - list all flights;
find <type> - list the flights served by a plane type;
save <filename> - save flights to a file;
load <filename> - load flights from a file;
help - show this help;
exit - quit the program.";
