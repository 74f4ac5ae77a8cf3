//! Port traits for roster storage and interactive I/O.
//!
//! The session loop only talks to these, so it can run against a real file
//! and terminal or against the in-memory doubles in [`crate::mock`].

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::codec::LoadReport;
use crate::model::Roster;

// ---------------------------------------------------------------------------
// Storage
// ---------------------------------------------------------------------------

/// Where a roster is read from and written back to.
pub trait RosterStore {
    /// Human-readable location, used in banners and error messages.
    fn location(&self) -> String;

    /// Read the roster. A missing source yields an empty roster.
    fn load(&self) -> Result<LoadReport>;

    /// Replace the stored roster entirely.
    fn save(&self, roster: &Roster) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Console
// ---------------------------------------------------------------------------

/// Line-based interactive I/O.
pub trait Console {
    /// Show `prompt` and read one line, without its line terminator.
    /// Returns `None` once input is exhausted.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Print one line of output.
    fn say(&mut self, line: &str) -> Result<()>;
}

/// A [`Console`] over any buffered reader and writer, normally stdin/stdout.
pub struct StdConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Keep the transcript readable when stdin closes mid-prompt.
            writeln!(self.output)?;
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }
}
