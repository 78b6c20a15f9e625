//! Shell domain: command parsing and the application model.

mod app;
mod command;

pub use app::{App, AppState, ShellError, ShellPanel};
pub use command::{Command, CommandError};
