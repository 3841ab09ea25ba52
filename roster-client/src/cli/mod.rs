//! Terminal front end for the `roster` binary.

pub mod commands;
pub mod prompt;
pub mod shell;

pub use commands::{Command, CommandError};
pub use prompt::DialoguerConfirmer;
pub use shell::run;
