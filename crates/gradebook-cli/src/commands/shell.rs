//! The `gradebook shell` command (also the default).

use std::io;

use anyhow::Result;

use gradebook_core::session::{Session, SessionEnd};
use gradebook_core::StdConsole;

use super::DataLocation;

pub fn execute(location: &DataLocation) -> Result<()> {
    let store = location.store()?;
    let stdin = io::stdin();
    let mut console = StdConsole::new(stdin.lock(), io::stdout().lock());

    let mut session = Session::open(&store, &mut console)?;
    match session.run()? {
        SessionEnd::Saved => {}
        SessionEnd::InputClosed => {
            tracing::info!("session ended without saving");
        }
    }

    Ok(())
}
