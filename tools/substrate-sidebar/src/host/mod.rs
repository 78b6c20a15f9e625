//! Host-side collaborators for the shell.

mod editor;
mod form;
mod menu;

pub use editor::EditorLauncher;
pub use form::PromptForm;
pub use menu::TextMenu;
