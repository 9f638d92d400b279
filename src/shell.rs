//! Interactive shell: reads commands line by line and drives the manager.
//!
//! A single reading state: prompt, read one line, dispatch, repeat until
//! `exit` or until the input is closed.  Prompts go to the output stream;
//! outcomes go to the manager's notice sink.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::error::AppError;
use crate::manager::{LibraryManager, Prompter};
use crate::notice::Notice;

pub const COMMAND_PROMPT: &str = "Enter command (add, remove, show, search, exit): ";
pub const BOOK_TITLE_PROMPT: &str = "Enter book title: ";
pub const BOOK_AUTHOR_PROMPT: &str = "Enter book author: ";
pub const BOOK_YEAR_PROMPT: &str = "Enter book year: ";
pub const REMOVE_PROMPT: &str = "Enter book title to remove: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove,
    Show,
    Search,
    Exit,
    /// Anything else, kept normalised for logging.
    Unknown(String),
}

/// Normalise a raw line (trim, lowercase) and map it to a command.
pub fn parse_command(line: &str) -> Command {
    let token = line.trim().to_lowercase();
    match token.as_str() {
        "add" => Command::Add,
        "remove" => Command::Remove,
        "show" => Command::Show,
        "search" => Command::Search,
        "exit" => Command::Exit,
        _ => Command::Unknown(token),
    }
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Exit,
    InputClosed,
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    echo_prompts: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, echo_prompts: bool) -> Self {
        Self { input, output, echo_prompts }
    }

    /// Give back the output stream (tests inspect what was prompted).
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until `exit` or end of input.
    pub fn run(&mut self, manager: &mut LibraryManager) -> Result<SessionEnd, AppError> {
        info!(
            store_type = manager.library().store_type(),
            searchable = manager.supports_search(),
            "shell started"
        );
        loop {
            let line = match self.ask(COMMAND_PROMPT) {
                Ok(line) => line,
                Err(AppError::InputClosed) => return Ok(self.closed()),
                Err(e) => return Err(e),
            };
            let command = parse_command(&line);
            debug!(?command, "dispatch");

            match self.dispatch(command, manager) {
                Ok(true) => {}
                Ok(false) => {
                    info!("exit requested");
                    return Ok(SessionEnd::Exit);
                }
                Err(AppError::InputClosed) => return Ok(self.closed()),
                Err(e) => return Err(e),
            }
        }
    }

    /// Returns `Ok(false)` when the session should stop.
    fn dispatch(&mut self, command: Command, manager: &mut LibraryManager) -> Result<bool, AppError> {
        match command {
            Command::Add => {
                let title = self.ask_trimmed(BOOK_TITLE_PROMPT)?;
                let author = self.ask_trimmed(BOOK_AUTHOR_PROMPT)?;
                let year = self.ask_trimmed(BOOK_YEAR_PROMPT)?;
                manager.add_book(&title, &author, &year);
            }
            Command::Remove => {
                let title = self.ask_trimmed(REMOVE_PROMPT)?;
                manager.remove_book(&title);
            }
            Command::Show => {
                manager.show_books();
            }
            Command::Search => {
                manager.search_by_author(self)?;
            }
            Command::Exit => return Ok(false),
            Command::Unknown(token) => {
                debug!(%token, "unknown command");
                manager.report(Notice::InvalidCommand);
            }
        }
        Ok(true)
    }

    fn ask_trimmed(&mut self, prompt: &str) -> Result<String, AppError> {
        Ok(self.ask(prompt)?.trim().to_string())
    }

    fn closed(&mut self) -> SessionEnd {
        if self.echo_prompts {
            // Leave the terminal on a fresh line after the dangling prompt.
            if let Err(e) = writeln!(self.output).and_then(|()| self.output.flush()) {
                debug!("final newline not written: {e}");
            }
        }
        info!("stdin closed");
        SessionEnd::InputClosed
    }
}

impl<R: BufRead, W: Write> Prompter for Shell<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String, AppError> {
        if self.echo_prompts {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
        }
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(AppError::InputClosed);
        }
        // Undecodable bytes become U+FFFD instead of ending the session.
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}
