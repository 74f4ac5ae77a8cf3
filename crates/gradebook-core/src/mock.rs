//! In-memory store and scripted console for testing.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use anyhow::Result;

use crate::codec::{parse_roster_str, serialize_roster, LoadReport};
use crate::model::Roster;
use crate::traits::{Console, RosterStore};

/// A [`RosterStore`] holding the file contents in memory.
///
/// Contents go through the same codec as [`crate::store::FileStore`], so
/// tests see exactly what would have been written to disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    contents: RefCell<Option<String>>,
    save_count: Cell<u32>,
    fail_saves: bool,
}

impl MemoryStore {
    /// A store with no backing file.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose backing file holds `contents`.
    pub fn with_contents(contents: &str) -> Self {
        Self {
            contents: RefCell::new(Some(contents.to_string())),
            ..Self::default()
        }
    }

    /// A store that rejects every save.
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    /// Current file contents, if anything was ever stored.
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> u32 {
        self.save_count.get()
    }
}

impl RosterStore for MemoryStore {
    fn location(&self) -> String {
        "memory".to_string()
    }

    fn load(&self) -> Result<LoadReport> {
        Ok(match self.contents.borrow().as_deref() {
            Some(text) => {
                let (roster, warnings) = parse_roster_str(text);
                LoadReport {
                    roster,
                    warnings,
                    source_found: true,
                }
            }
            None => LoadReport::default(),
        })
    }

    fn save(&self, roster: &Roster) -> Result<()> {
        if self.fail_saves {
            anyhow::bail!("failed to write roster file: memory store is read-only");
        }
        *self.contents.borrow_mut() = Some(serialize_roster(roster));
        self.save_count.set(self.save_count.get() + 1);
        Ok(())
    }
}

/// A [`Console`] that replays canned input lines and records all output.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    transcript: Vec<String>,
    prompts: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Every line passed to [`Console::say`], in order.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Every prompt shown, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Whether any output line contains `needle`.
    pub fn said(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }

    /// Input lines not consumed by the session.
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.inputs.pop_front())
    }

    fn say(&mut self, line: &str) -> Result<()> {
        self.transcript.push(line.to_string());
        Ok(())
    }
}
