//! Core data model types for gradebook.
//!
//! A roster maps student identifiers (NIS) to their records. The map is
//! ordered so listing and saving always walk identifiers ascending.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Full name. Only empty when a malformed line was tolerated on load.
    pub name: String,
    /// Scores in the order they were recorded.
    #[serde(default)]
    pub scores: Vec<i64>,
}

impl Student {
    /// Create a student with no scores yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scores: Vec::new(),
        }
    }

    pub fn with_scores(name: impl Into<String>, scores: Vec<i64>) -> Self {
        Self {
            name: name.into(),
            scores,
        }
    }
}

/// All student records, keyed by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    students: BTreeMap<String, Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn contains(&self, nis: &str) -> bool {
        self.students.contains_key(nis)
    }

    pub fn get(&self, nis: &str) -> Option<&Student> {
        self.students.get(nis)
    }

    pub fn get_mut(&mut self, nis: &str) -> Option<&mut Student> {
        self.students.get_mut(nis)
    }

    /// Insert or replace a record, returning the previous one if any.
    pub fn insert(&mut self, nis: impl Into<String>, student: Student) -> Option<Student> {
        self.students.insert(nis.into(), student)
    }

    /// Iterate records in ascending identifier order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Student> {
        self.students.iter()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = (&'a String, &'a Student);
    type IntoIter = btree_map::Iter<'a, String, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Student)> for Roster {
    fn from_iter<I: IntoIterator<Item = (K, Student)>>(iter: I) -> Self {
        Self {
            students: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Letter grade derived from an average score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
        };
        f.write_str(letter)
    }
}
