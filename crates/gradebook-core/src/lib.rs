//! gradebook-core — Roster model, flat-file codec, and score statistics.
//!
//! This crate holds everything the `gradebook` binary does apart from
//! argument parsing: loading and saving the roster file, validating
//! mutations, computing grades, and the interactive menu session.

pub mod codec;
pub mod config;
pub mod error;
pub mod mock;
pub mod model;
pub mod roster;
pub mod session;
pub mod statistics;
pub mod store;
pub mod traits;

pub use codec::{LoadReport, LoadWarning, WarningKind};
pub use config::{load_config_from, GradebookConfig};
pub use error::RosterError;
pub use model::{Grade, Roster, Student};
pub use store::FileStore;
pub use traits::{Console, RosterStore, StdConsole};
