//! Service Layer
//!
//! Contains the application service that turns menu clicks into registry
//! mutations and calls to the host collaborators via ports.

pub mod nodes_panel;

pub use nodes_panel::NodesPanel;
