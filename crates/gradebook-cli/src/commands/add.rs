//! The `gradebook add-student` and `gradebook add-score` commands.
//!
//! Each applies a single change and saves straight away. The file is only
//! rewritten when the change was accepted.

use anyhow::Result;

use gradebook_core::roster;
use gradebook_core::RosterStore;

use super::DataLocation;

pub fn add_student(location: &DataLocation, nis: &str, name: &str) -> Result<()> {
    let store = location.store()?;
    let mut roster = store.load()?.roster;

    let message = roster::add_student(&mut roster, nis, name)?;
    store.save(&roster)?;
    println!("{message}");
    Ok(())
}

pub fn add_score(location: &DataLocation, nis: &str, score: &str) -> Result<()> {
    let store = location.store()?;
    let mut roster = store.load()?.roster;

    let message = roster::add_score(&mut roster, nis, score)?;
    store.save(&roster)?;
    println!("{message}");
    Ok(())
}
