//! Interactive assistant session.
//!
//! Reads one command per line, dispatches it against the address book and
//! writes the reply. The session is generic over its input and output so it
//! can be driven by stdin/stdout or by an in-memory script.

pub mod handlers;
pub mod parser;

pub use parser::{parse_input, Command};

use crate::models::AddressBook;
use std::io::{self, BufRead, Write};

const GREETING: &str = "Welcome to the assistant bot!";
const PROMPT: &str = "Enter a command: ";
const FAREWELL: &str = "Good bye!";

/// What the session should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the reply (if any) and read the next line.
    Reply(Option<String>),
    /// End the session.
    Exit,
}

/// The command loop, holding the book it operates on.
pub struct Assistant<'a> {
    book: &'a mut AddressBook,
}

impl<'a> Assistant<'a> {
    pub fn new(book: &'a mut AddressBook) -> Self {
        Self { book }
    }

    /// Handle one input line.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        let Some((command, args)) = parse_input(line) else {
            return Outcome::Reply(None);
        };
        tracing::debug!(?command, args = args.len(), "Dispatching command");

        let result = match command {
            Command::Exit => return Outcome::Exit,
            Command::Hello => Ok("How can I help you?".to_string()),
            Command::Add => handlers::add_contact(&args, self.book),
            Command::Change => handlers::change_contact(&args, self.book),
            Command::Phone => handlers::show_phone(&args, self.book),
            Command::All => Ok(handlers::show_all(self.book)),
            Command::AddBirthday => handlers::add_birthday(&args, self.book),
            Command::ShowBirthday => handlers::show_birthday(&args, self.book),
            Command::Birthdays => Ok(handlers::birthdays(self.book)),
            Command::Help => Ok(handlers::help_text().to_string()),
            Command::Unknown => Ok("Invalid command.".to_string()),
        };

        let reply = result.unwrap_or_else(|e| {
            tracing::debug!(?command, error = ?e, "Command failed");
            handlers::render_error(&e)
        });
        Outcome::Reply(Some(reply))
    }

    /// Run the session until `exit`/`close` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{}", GREETING)?;

        let mut line = String::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                tracing::info!("Input closed, ending session");
                writeln!(output)?;
                break;
            }

            match self.handle_line(&line) {
                Outcome::Reply(Some(reply)) => writeln!(output, "{}", reply)?,
                Outcome::Reply(None) => {}
                Outcome::Exit => break,
            }
        }

        writeln!(output, "{}", FAREWELL)?;
        Ok(())
    }
}
