//! Interactive menu session.
//!
//! Loads the roster once, runs the menu until "save & exit" is chosen, then
//! writes the roster back. Nothing is saved if input runs out first.

use anyhow::Result;

use crate::model::Roster;
use crate::roster::{
    add_score, add_student, check_existing_identifier, check_new_identifier, list_students,
    student_detail, StudentDetail,
};
use crate::traits::{Console, RosterStore};

const MENU: [&str; 6] = [
    "--- Main Menu ---",
    "1. List students",
    "2. View student detail",
    "3. Add new student",
    "4. Add score to student",
    "5. Save & exit",
];

/// A menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    List,
    Detail,
    AddStudent,
    AddScore,
    SaveAndExit,
}

impl MenuChoice {
    /// Parse the text typed at the menu prompt.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::List),
            "2" => Some(MenuChoice::Detail),
            "3" => Some(MenuChoice::AddStudent),
            "4" => Some(MenuChoice::AddScore),
            "5" => Some(MenuChoice::SaveAndExit),
            _ => None,
        }
    }
}

/// How a session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The roster was written back to the store.
    Saved,
    /// Input was exhausted; changes were discarded.
    InputClosed,
}

/// One interactive run over a store and a console.
pub struct Session<'a, S: ?Sized, C: ?Sized> {
    store: &'a S,
    console: &'a mut C,
    roster: Roster,
}

impl<'a, S, C> Session<'a, S, C>
where
    S: RosterStore + ?Sized,
    C: Console + ?Sized,
{
    /// Load the roster and print the startup banner.
    pub fn open(store: &'a S, console: &'a mut C) -> Result<Self> {
        let report = store.load()?;
        let location = store.location();

        console.say("--- Student Information System ---")?;
        if !report.roster.is_empty() {
            console.say(&format!(
                "Loaded {} student(s) from '{location}'.",
                report.roster.len()
            ))?;
        } else if report.source_found {
            console.say(&format!(
                "'{location}' exists but contains no valid records."
            ))?;
        } else {
            console.say(&format!(
                "'{location}' not found. Starting with an empty roster."
            ))?;
        }

        Ok(Self {
            store,
            console,
            roster: report.roster,
        })
    }

    /// The in-memory roster, including unsaved changes.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Run the menu loop until the user saves or input ends.
    pub fn run(&mut self) -> Result<SessionEnd> {
        loop {
            self.console.say("")?;
            for line in MENU {
                self.console.say(line)?;
            }
            let Some(input) = self.console.prompt("Choose an option: ")? else {
                return self.input_closed();
            };

            let handled = match MenuChoice::parse(&input) {
                Some(MenuChoice::List) => self.show_list().map(|_| true),
                Some(MenuChoice::Detail) => self.show_detail(),
                Some(MenuChoice::AddStudent) => self.add_student(),
                Some(MenuChoice::AddScore) => self.add_score(),
                Some(MenuChoice::SaveAndExit) => {
                    self.store.save(&self.roster)?;
                    self.console.say("Data saved. Goodbye.")?;
                    return Ok(SessionEnd::Saved);
                }
                None => self
                    .console
                    .say("Unrecognized option. Please enter a number from 1 to 5.")
                    .map(|_| true),
            }?;

            if !handled {
                return self.input_closed();
            }
        }
    }

    fn input_closed(&self) -> Result<SessionEnd> {
        tracing::warn!("input closed before save, discarding unsaved changes");
        Ok(SessionEnd::InputClosed)
    }

    /// Prompt for one line; `None` means input ended.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        Ok(self
            .console
            .prompt(prompt)?
            .map(|line| line.trim().to_string()))
    }

    fn show_list(&mut self) -> Result<()> {
        match list_students(&self.roster) {
            None => self.console.say("No students yet."),
            Some(students) => {
                self.console.say("Students:")?;
                for (nis, name) in students {
                    self.console.say(&format!("{nis}: {name}"))?;
                }
                Ok(())
            }
        }
    }

    // The handlers below return Ok(false) when input ended mid-operation.

    fn show_detail(&mut self) -> Result<bool> {
        let Some(nis) = self.ask("Enter NIS to view: ")? else {
            return Ok(false);
        };
        match student_detail(&self.roster, &nis) {
            Ok(detail) => {
                for line in detail_lines(&detail) {
                    self.console.say(&line)?;
                }
            }
            Err(e) => self.console.say(&e.to_string())?,
        }
        Ok(true)
    }

    fn add_student(&mut self) -> Result<bool> {
        let Some(nis) = self.ask("Enter new NIS: ")? else {
            return Ok(false);
        };
        if let Err(e) = check_new_identifier(&self.roster, &nis) {
            self.console.say(&e.to_string())?;
            return Ok(true);
        }
        let Some(name) = self.ask("Enter full name: ")? else {
            return Ok(false);
        };
        let message = match add_student(&mut self.roster, &nis, &name) {
            Ok(msg) => msg,
            Err(e) => e.to_string(),
        };
        self.console.say(&message)?;
        Ok(true)
    }

    fn add_score(&mut self) -> Result<bool> {
        let Some(nis) = self.ask("Enter student NIS: ")? else {
            return Ok(false);
        };
        if let Err(e) = check_existing_identifier(&self.roster, &nis) {
            self.console.say(&e.to_string())?;
            return Ok(true);
        }
        let Some(raw) = self.ask("Enter new score (0-100): ")? else {
            return Ok(false);
        };
        let message = match add_score(&mut self.roster, &nis, &raw) {
            Ok(msg) => msg,
            Err(e) => e.to_string(),
        };
        self.console.say(&message)?;
        Ok(true)
    }
}

/// Render a student's detail block.
pub fn detail_lines(detail: &StudentDetail) -> Vec<String> {
    let scores = if detail.scores.is_empty() {
        "(no scores yet)".to_string()
    } else {
        detail
            .scores
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };

    vec![
        "----- Student Detail -----".to_string(),
        format!("NIS     : {}", detail.nis),
        format!("Name    : {}", detail.name),
        format!("Scores  : {scores}"),
        format!("Average : {:.2}", detail.stats.average),
        format!("Highest : {}", detail.stats.max),
        format!("Lowest  : {}", detail.stats.min),
        format!("Grade   : {}", detail.stats.grade),
        "--------------------------".to_string(),
    ]
}
