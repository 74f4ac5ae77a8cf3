//! The `gradebook list` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use gradebook_core::roster::list_students;
use gradebook_core::statistics::compute_stats;
use gradebook_core::RosterStore;

use super::DataLocation;

pub fn execute(location: &DataLocation) -> Result<()> {
    let report = location.store()?.load()?;
    let roster = &report.roster;

    let Some(students) = list_students(roster) else {
        println!("No students yet.");
        return Ok(());
    };

    let mut table = Table::new();
    table.set_header(vec!["NIS", "Name", "Scores", "Average", "Grade"]);

    for (nis, name) in students {
        let scores = roster
            .get(nis)
            .map(|s| s.scores.as_slice())
            .unwrap_or_default();
        let stats = compute_stats(scores);
        table.add_row(vec![
            Cell::new(nis),
            Cell::new(name),
            Cell::new(scores.len()),
            Cell::new(format!("{:.2}", stats.average)),
            Cell::new(stats.grade),
        ]);
    }

    println!("{table}");
    println!("{} student(s)", roster.len());
    Ok(())
}
