//! Substrate Sidebar: headless driver for the nodes panel
//!
//! Stands in for the editor host. Each input line is one user gesture
//! (a menu click, a dialog answer, a header button) and is applied to the
//! panel service exactly as a host would apply it.
//!
//! ```text
//! > add Remote wss://rpc.example.org
//! > click Remote Connect to node
//! > list
//! Nodes
//!   Default  ws://127.0.0.1:9944
//! * Remote   wss://rpc.example.org  connected
//! ```

pub mod domain;
pub mod host;

pub use domain::{App, AppState, Command, CommandError, ShellError};
pub use host::{EditorLauncher, PromptForm, TextMenu};
