pub mod commands;
pub mod core;
pub mod io;
pub mod output;
pub mod terminal;
pub mod wizard;

pub use self::core::{run_cli, CliContext, CommandError};
