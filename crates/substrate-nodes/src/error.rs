//! Error types for the sidebar node subsystem

use thiserror::Error;

/// Validation failures raised by the node registry.
///
/// These are returned synchronously to the caller. None of them is fatal and
/// none is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Node name already in use: {name}")]
    DuplicateName { name: String },

    #[error("Node not found: {name}")]
    NotFound { name: String },
}

/// Errors from the tab strip.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabError {
    #[error("Unknown panel id: {0}")]
    UnknownPanel(u32),
}

/// Errors reported by a node connector.
#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Connection failed: {0}")]
    Connection(String),
}

/// Errors reported while opening a file in the host editor.
#[derive(Debug, Error)]
pub enum OpenerError {
    #[error("Failed to launch editor `{editor}`: {source}")]
    Launch {
        editor: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Editor `{editor}` exited with status {status}")]
    Exit { editor: String, status: String },
}

/// Errors surfaced by the panel service.
#[derive(Debug, Error)]
pub enum PanelError {
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Connector error: {0}")]
    Connector(#[from] ConnectorError),

    #[error("Editor error: {0}")]
    Opener(#[from] OpenerError),
}
