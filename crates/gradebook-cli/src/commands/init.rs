//! The `gradebook init` command.

use anyhow::Result;

use gradebook_core::config::SAMPLE_CONFIG;

pub fn execute() -> Result<()> {
    if std::path::Path::new("gradebook.toml").exists() {
        println!("gradebook.toml already exists, skipping.");
    } else {
        std::fs::write("gradebook.toml", SAMPLE_CONFIG)?;
        println!("Created gradebook.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit data_file in gradebook.toml if needed");
    println!("  2. Run: gradebook");

    Ok(())
}
