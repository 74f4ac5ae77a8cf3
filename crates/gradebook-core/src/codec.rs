//! Flat-file roster format.
//!
//! One record per line: `<nis>,<name>,<score1>;<score2>;...`. Parsing is
//! lenient: malformed lines and score tokens are dropped, never fatal. What
//! was dropped is reported as [`LoadWarning`]s next to the roster.

use std::fmt;

use serde::Serialize;

use crate::model::{Roster, Student};

const FIELD_SEPARATOR: char = ',';
const SCORE_SEPARATOR: &str = ";";

/// A problem found while parsing that did not stop the load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadWarning {
    /// 1-based line number.
    pub line: usize,
    pub kind: WarningKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum WarningKind {
    /// The line had no name field and was skipped.
    MissingName,
    /// A score token was not an integer and was dropped.
    BadScoreToken(String),
    /// The identifier appeared earlier; this line replaced it.
    DuplicateId(String),
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WarningKind::MissingName => {
                write!(f, "line {}: no name field, line skipped", self.line)
            }
            WarningKind::BadScoreToken(token) => {
                write!(f, "line {}: score '{token}' is not an integer, dropped", self.line)
            }
            WarningKind::DuplicateId(nis) => write!(
                f,
                "line {}: NIS {nis} already defined earlier, this line replaces it",
                self.line
            ),
        }
    }
}

/// Result of reading a roster from storage.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub roster: Roster,
    pub warnings: Vec<LoadWarning>,
    /// Whether the backing file existed at all.
    pub source_found: bool,
}

/// Parse roster file contents.
pub fn parse_roster_str(content: &str) -> (Roster, Vec<LoadWarning>) {
    let mut roster = Roster::new();
    let mut warnings = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.splitn(3, FIELD_SEPARATOR);
        let nis = fields.next().unwrap_or_default().trim();
        let Some(name) = fields.next() else {
            tracing::debug!(line = line_no, "skipping line without name field");
            warnings.push(LoadWarning {
                line: line_no,
                kind: WarningKind::MissingName,
            });
            continue;
        };

        let scores = match fields.next() {
            Some(raw_scores) => parse_scores(raw_scores, line_no, &mut warnings),
            None => Vec::new(),
        };

        if roster
            .insert(nis, Student::with_scores(name.trim(), scores))
            .is_some()
        {
            tracing::debug!(line = line_no, nis, "duplicate NIS, keeping the later line");
            warnings.push(LoadWarning {
                line: line_no,
                kind: WarningKind::DuplicateId(nis.to_string()),
            });
        }
    }

    (roster, warnings)
}

fn parse_scores(raw: &str, line_no: usize, warnings: &mut Vec<LoadWarning>) -> Vec<i64> {
    raw.trim()
        .split(SCORE_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| match token.parse::<i64>() {
            Ok(score) => Some(score),
            Err(_) => {
                tracing::debug!(line = line_no, token, "dropping non-integer score token");
                warnings.push(LoadWarning {
                    line: line_no,
                    kind: WarningKind::BadScoreToken(token.to_string()),
                });
                None
            }
        })
        .collect()
}

/// Render a roster in file format, one newline-terminated line per student.
pub fn serialize_roster(roster: &Roster) -> String {
    let mut out = String::new();
    for (nis, student) in roster {
        out.push_str(&format_line(nis, student));
        out.push('\n');
    }
    out
}

fn format_line(nis: &str, student: &Student) -> String {
    let scores = student
        .scores
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(SCORE_SEPARATOR);
    format!(
        "{nis}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{scores}",
        student.name.trim()
    )
}
