//! The `gradebook show` command.

use anyhow::Result;

use gradebook_core::roster::student_detail;
use gradebook_core::session::detail_lines;
use gradebook_core::RosterStore;

use super::DataLocation;

pub fn execute(location: &DataLocation, nis: &str, json: bool) -> Result<()> {
    let report = location.store()?.load()?;
    let detail = student_detail(&report.roster, nis)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
    } else {
        for line in detail_lines(&detail) {
            println!("{line}");
        }
    }

    Ok(())
}
