//! Interactive command loop.
//!
//! The loop reads one command per line, dispatches it against the registry
//! and storage, and reports recoverable errors without stopping. Only a
//! failure of the terminal streams themselves ends the loop with an error.

mod commands;
pub mod table;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::{debug, info, warn};

pub use commands::{Command, HELP};
pub use table::Table;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::flight::FlightRecord;
use crate::registry::Registry;
use crate::storage::Storage;

const DESTINATION_PROMPT: &str = "Destination: ";
const FLIGHT_NUMBER_PROMPT: &str = "Flight number: ";
const PLANE_TYPE_PROMPT: &str = "Plane type: ";
const FIND_PROMPT: &str = "Plane type to search for: ";

/// Whether the loop keeps running after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command.
    Continue,
    /// Stop the loop.
    Exit,
}

/// The interactive loop over an input stream and two output streams.
///
/// Normal output goes to `out`; error reports go to `err`.
#[derive(Debug)]
pub struct Repl<R, W, E> {
    input: R,
    out: W,
    err: E,
    registry: Registry,
    storage: Storage,
    prompt: String,
    default_file: Option<PathBuf>,
}

impl<R: BufRead, W: Write, E: Write> Repl<R, W, E> {
    /// Create a loop with an empty registry.
    #[must_use]
    pub fn new(input: R, out: W, err: E, config: &Config) -> Self {
        Self {
            input,
            out,
            err,
            registry: Registry::new(),
            storage: Storage::with_indent(config.storage.indent),
            prompt: config.repl.prompt.clone(),
            default_file: config.storage.default_file.clone(),
        }
    }

    /// The current registry.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Run until `exit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.out, "{}", self.prompt)?;
            self.out.flush()?;

            let Some(line) = self.read_line()? else {
                debug!("End of input");
                return Ok(());
            };

            let flow = match line.parse::<Command>() {
                Ok(command) => self.dispatch(command)?,
                Err(err) => {
                    self.report(&err)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                info!("Exiting");
                return Ok(());
            }
        }
    }

    /// Execute a command, reporting recoverable errors to the error stream.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn dispatch(&mut self, command: Command) -> Result<Flow> {
        debug!(command = command.keyword(), "Dispatching");
        match self.execute(command) {
            Ok(flow) => Ok(flow),
            Err(err) if err.is_recoverable() => {
                self.report(&err)?;
                Ok(Flow::Continue)
            }
            Err(err) => Err(err),
        }
    }

    fn execute(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Add => return self.add(),
            Command::List => self.list()?,
            Command::Find(plane_type) => return self.find(plane_type),
            Command::Save(file) => self.save(file)?,
            Command::Load(file) => self.load(file)?,
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::Exit => return Ok(Flow::Exit),
            Command::Empty => {}
        }
        Ok(Flow::Continue)
    }

    fn add(&mut self) -> Result<Flow> {
        let Some(flight) = self.prompt_flight()? else {
            return Ok(Flow::Exit);
        };
        info!(flight = %flight, "Adding flight");
        self.registry.add(flight);
        Ok(Flow::Continue)
    }

    fn list(&mut self) -> Result<()> {
        if self.registry.is_empty() {
            writeln!(self.out, "The flight list is empty.")?;
        } else {
            writeln!(self.out, "{}", Table::new(self.registry.list()))?;
        }
        Ok(())
    }

    fn find(&mut self, plane_type: Option<String>) -> Result<Flow> {
        let plane_type = match plane_type {
            Some(plane_type) => plane_type,
            None => match self.ask(FIND_PROMPT)? {
                Some(plane_type) => plane_type,
                None => return Ok(Flow::Exit),
            },
        };

        let found = self.registry.find(&plane_type);
        if found.is_empty() {
            writeln!(
                self.out,
                "No flights served by plane type '{plane_type}' were found."
            )?;
        } else {
            writeln!(self.out, "{}", Table::new(found))?;
        }
        Ok(Flow::Continue)
    }

    fn save(&mut self, file: Option<PathBuf>) -> Result<()> {
        let path = self.resolve_file(file, "save")?;
        self.storage.save(self.registry.list(), &path)?;
        writeln!(
            self.out,
            "Saved {} flights to {}.",
            self.registry.len(),
            path.display()
        )?;
        Ok(())
    }

    fn load(&mut self, file: Option<PathBuf>) -> Result<()> {
        let path = self.resolve_file(file, "load")?;
        let records = self.storage.load(&path)?;
        self.registry = Registry::from_records(records);
        writeln!(
            self.out,
            "Loaded {} flights from {}.",
            self.registry.len(),
            path.display()
        )?;
        Ok(())
    }

    fn resolve_file(&self, file: Option<PathBuf>, command: &'static str) -> Result<PathBuf> {
        file.or_else(|| self.default_file.clone())
            .ok_or(Error::MissingFileName { command })
    }

    /// Prompt for every field of a flight, re-prompting on invalid input.
    ///
    /// Returns `None` if input ends before the flight is complete.
    fn prompt_flight(&mut self) -> Result<Option<FlightRecord>> {
        let Some(destination) = self.ask_until(DESTINATION_PROMPT, parse_destination)? else {
            return Ok(None);
        };
        let Some(flight_number) = self.ask_until(FLIGHT_NUMBER_PROMPT, parse_flight_number)?
        else {
            return Ok(None);
        };
        let Some(plane_type) = self.ask(PLANE_TYPE_PROMPT)? else {
            return Ok(None);
        };

        Ok(Some(FlightRecord::new(destination, flight_number, plane_type)))
    }

    fn ask_until<T>(&mut self, label: &str, parse: fn(&str) -> Result<T>) -> Result<Option<T>> {
        loop {
            let Some(answer) = self.ask(label)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => self.report(&err)?,
            }
        }
    }

    fn ask(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        Ok(self.read_line()?.map(|line| line.trim().to_string()))
    }

    /// Read one line without its terminator.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD so a stray byte is
    /// reported as bad input instead of ending the session.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn report(&mut self, err: &Error) -> Result<()> {
        warn!("{err}");
        writeln!(self.err, "Error: {err}")?;
        let more = err.violations().len().saturating_sub(1);
        if more > 0 {
            writeln!(self.err, "({more} more violations found)")?;
        }
        Ok(())
    }
}

fn parse_destination(input: &str) -> Result<String> {
    if input.is_empty() {
        return Err(Error::EmptyDestination);
    }
    Ok(input.to_string())
}

fn parse_flight_number(input: &str) -> Result<i64> {
    input
        .parse()
        .map_err(|_| Error::invalid_flight_number(input))
}
