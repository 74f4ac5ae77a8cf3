//! gradebook CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "gradebook", version, about = "Student score roster on a flat text file")]
struct Cli {
    /// Roster file (overrides config and GRADEBOOK_DATA_FILE)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (default when no command is given)
    Shell,

    /// List all students with their averages and grades
    List,

    /// Show one student's scores and statistics
    Show {
        /// Student identifier
        nis: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a new student and save
    AddStudent {
        /// Student identifier
        nis: String,

        /// Full name
        name: String,
    },

    /// Append a score (0-100) to a student and save
    AddScore {
        /// Student identifier
        nis: String,

        /// Score value
        #[arg(allow_hyphen_values = true)]
        score: String,
    },

    /// Report lines and score tokens that are skipped when loading
    Validate,

    /// Create a starter gradebook.toml
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("gradebook=warn,gradebook_core=warn")
            }),
        )
        .init();

    let cli = Cli::parse();
    let location = commands::DataLocation {
        file: cli.file,
        config: cli.config,
    };

    let result = match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => commands::shell::execute(&location),
        Commands::List => commands::list::execute(&location),
        Commands::Show { nis, json } => commands::show::execute(&location, &nis, json),
        Commands::AddStudent { nis, name } => {
            commands::add::add_student(&location, &nis, &name)
        }
        Commands::AddScore { nis, score } => commands::add::add_score(&location, &nis, &score),
        Commands::Validate => commands::validate::execute(&location),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
