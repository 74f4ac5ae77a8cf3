//! The `gradebook validate` command.

use anyhow::Result;

use gradebook_core::RosterStore;

use super::DataLocation;

pub fn execute(location: &DataLocation) -> Result<()> {
    let store = location.store()?;
    let report = store.load()?;

    if !report.source_found {
        println!("{} not found.", store.location());
        return Ok(());
    }

    println!(
        "Roster file: {} ({} students)",
        store.location(),
        report.roster.len()
    );

    for w in &report.warnings {
        println!("  WARNING: {w}");
    }

    if report.warnings.is_empty() {
        println!("No problems found.");
    } else {
        println!("\n{} warning(s) found.", report.warnings.len());
    }

    Ok(())
}
