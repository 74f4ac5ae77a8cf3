//! Roster mutations and queries.
//!
//! Text inputs are trimmed before validation. A failed mutation never
//! touches the roster.

use std::num::IntErrorKind;

use serde::Serialize;

use crate::error::RosterError;
use crate::model::{Roster, Student};
use crate::statistics::{compute_stats, Stats};

/// Inclusive bounds for a score entered through [`add_score`].
pub const MIN_SCORE: i64 = 0;
pub const MAX_SCORE: i64 = 100;

/// A student together with their computed statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentDetail {
    pub nis: String,
    pub name: String,
    pub scores: Vec<i64>,
    pub stats: Stats,
}

/// Check that `nis` is non-empty and not yet taken.
///
/// Split out so an interactive caller can reject the identifier before
/// asking for a name.
pub fn check_new_identifier(roster: &Roster, nis: &str) -> Result<(), RosterError> {
    let nis = nis.trim();
    if nis.is_empty() {
        return Err(RosterError::EmptyIdentifier);
    }
    if roster.contains(nis) {
        return Err(RosterError::DuplicateIdentifier(nis.to_string()));
    }
    Ok(())
}

/// Check that `nis` names an existing student.
pub fn check_existing_identifier(roster: &Roster, nis: &str) -> Result<(), RosterError> {
    let nis = nis.trim();
    if nis.is_empty() {
        return Err(RosterError::EmptyIdentifier);
    }
    if !roster.contains(nis) {
        return Err(RosterError::NotFound(nis.to_string()));
    }
    Ok(())
}

/// Add a new student with no scores.
pub fn add_student(roster: &mut Roster, nis: &str, name: &str) -> Result<String, RosterError> {
    check_new_identifier(roster, nis)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(RosterError::EmptyName);
    }

    let nis = nis.trim();
    roster.insert(nis, Student::new(name));
    tracing::debug!(nis, "student added");
    Ok(format!("Student with NIS {nis} added."))
}

/// Append a score to an existing student.
pub fn add_score(roster: &mut Roster, nis: &str, raw_score: &str) -> Result<String, RosterError> {
    check_existing_identifier(roster, nis)?;
    let nis = nis.trim();
    let score = parse_score(raw_score)?;

    let student = roster
        .get_mut(nis)
        .ok_or_else(|| RosterError::NotFound(nis.to_string()))?;
    student.scores.push(score);
    tracing::debug!(nis, score, "score added");
    Ok(format!("Score {score} added for NIS {nis}."))
}

fn parse_score(raw: &str) -> Result<i64, RosterError> {
    let raw = raw.trim();
    let score = raw.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            RosterError::ScoreOutOfRange(raw.to_string())
        }
        _ => RosterError::NotAnInteger(raw.to_string()),
    })?;

    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(RosterError::ScoreOutOfRange(score.to_string()));
    }
    Ok(score)
}

/// List `(nis, name)` pairs in ascending identifier order.
///
/// Returns `None` when there is nothing to list.
pub fn list_students(roster: &Roster) -> Option<impl Iterator<Item = (&str, &str)> + '_> {
    if roster.is_empty() {
        return None;
    }
    Some(
        roster
            .iter()
            .map(|(nis, student)| (nis.as_str(), student.name.as_str())),
    )
}

/// Look up a student and compute their statistics.
pub fn student_detail(roster: &Roster, nis: &str) -> Result<StudentDetail, RosterError> {
    let nis = nis.trim();
    if nis.is_empty() {
        return Err(RosterError::EmptyIdentifier);
    }
    let student = roster
        .get(nis)
        .ok_or_else(|| RosterError::NotFound(nis.to_string()))?;

    Ok(StudentDetail {
        nis: nis.to_string(),
        name: student.name.clone(),
        scores: student.scores.clone(),
        stats: compute_stats(&student.scores),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Grade;

    fn sample() -> Roster {
        [
            ("S02", Student::with_scores("Budi", vec![60, 70])),
            ("S01", Student::with_scores("Adi", vec![90, 80, 70])),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn add_student_inserts_with_no_scores() {
        let mut roster = sample();
        let msg = add_student(&mut roster, " S03 ", "  Citra Lestari ").unwrap();
        assert!(msg.contains("S03"));
        let student = roster.get("S03").unwrap();
        assert_eq!(student.name, "Citra Lestari");
        assert!(student.scores.is_empty());
    }

    #[test]
    fn add_student_rejects_duplicate_and_leaves_roster_unchanged() {
        let mut roster = sample();
        let before = roster.clone();
        let err = add_student(&mut roster, "S01", "Someone Else").unwrap_err();
        assert_eq!(err, RosterError::DuplicateIdentifier("S01".into()));
        assert_eq!(roster, before);
    }

    #[test]
    fn add_student_checks_identifier_before_name() {
        let mut roster = sample();
        assert_eq!(
            add_student(&mut roster, "  ", "").unwrap_err(),
            RosterError::EmptyIdentifier
        );
        assert_eq!(
            add_student(&mut roster, "S01", "").unwrap_err(),
            RosterError::DuplicateIdentifier("S01".into())
        );
        assert_eq!(
            add_student(&mut roster, "S09", "   ").unwrap_err(),
            RosterError::EmptyName
        );
        assert_eq!(roster, sample());
    }

    #[test]
    fn add_score_accepts_bounds() {
        let mut roster = sample();
        add_score(&mut roster, "S02", "0").unwrap();
        let msg = add_score(&mut roster, "S02", " 100 ").unwrap();
        assert!(msg.contains("100"));
        assert!(msg.contains("S02"));
        assert_eq!(roster.get("S02").unwrap().scores, vec![60, 70, 0, 100]);
    }

    #[test]
    fn add_score_rejects_out_of_range() {
        let mut roster = sample();
        assert_eq!(
            add_score(&mut roster, "S01", "101").unwrap_err(),
            RosterError::ScoreOutOfRange("101".into())
        );
        assert_eq!(
            add_score(&mut roster, "S01", "-1").unwrap_err(),
            RosterError::ScoreOutOfRange("-1".into())
        );
        assert!(matches!(
            add_score(&mut roster, "S01", "99999999999999999999999").unwrap_err(),
            RosterError::ScoreOutOfRange(_)
        ));
        assert_eq!(roster, sample());
    }

    #[test]
    fn add_score_reports_each_failure_cause() {
        let mut roster = sample();
        assert_eq!(
            add_score(&mut roster, "", "50").unwrap_err(),
            RosterError::EmptyIdentifier
        );
        assert_eq!(
            add_score(&mut roster, "S99", "50").unwrap_err(),
            RosterError::NotFound("S99".into())
        );
        assert_eq!(
            add_score(&mut roster, "S01", "eighty").unwrap_err(),
            RosterError::NotAnInteger("eighty".into())
        );
        assert_eq!(
            add_score(&mut roster, "S01", "80.5").unwrap_err(),
            RosterError::NotAnInteger("80.5".into())
        );
        assert_eq!(roster, sample());
    }

    #[test]
    fn failure_messages_are_distinct() {
        let messages: std::collections::HashSet<String> = [
            RosterError::EmptyIdentifier,
            RosterError::NotFound("S1".into()),
            RosterError::NotAnInteger("x".into()),
            RosterError::ScoreOutOfRange("101".into()),
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        assert_eq!(messages.len(), 4);
    }

    #[test]
    fn list_is_sorted_and_restartable() {
        let roster = sample();
        let first: Vec<_> = list_students(&roster).unwrap().collect();
        assert_eq!(first, vec![("S01", "Adi"), ("S02", "Budi")]);
        let second: Vec<_> = list_students(&roster).unwrap().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn list_empty_roster_signals_no_data() {
        let empty = Roster::new();
        assert!(list_students(&empty).is_none());

        let mut one = Roster::new();
        one.insert("S01", Student::new("Adi"));
        assert_eq!(list_students(&one).unwrap().count(), 1);
    }

    #[test]
    fn detail_includes_stats() {
        let detail = student_detail(&sample(), " S01 ").unwrap();
        assert_eq!(detail.nis, "S01");
        assert_eq!(detail.name, "Adi");
        assert_eq!(detail.scores, vec![90, 80, 70]);
        assert_eq!(detail.stats.max, 90);
        assert_eq!(detail.stats.min, 70);
        assert_eq!(detail.stats.grade, Grade::B);
    }

    #[test]
    fn detail_not_found() {
        let roster = sample();
        let err = student_detail(&roster, "S99").unwrap_err();
        assert!(err.is_not_found());
        let err = student_detail(&roster, "").unwrap_err();
        assert_eq!(err, RosterError::EmptyIdentifier);
        assert!(err.is_not_found());
    }
}
