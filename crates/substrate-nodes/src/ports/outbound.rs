//! Outbound Ports (Driven Ports)
//!
//! Collaborators the panel needs from the editor host. None of them is
//! called by the registry itself.

use std::path::Path;

use async_trait::async_trait;

use crate::domain::{MenuAction, NodeRecord};
use crate::error::{ConnectorError, OpenerError};

/// Contents used when the types document cannot be read.
pub const DEFAULT_TYPES: &str = "{}\n";

/// Establishes the link to a node (Driven Port)
///
/// The endpoint is the only connection parameter.
#[async_trait]
pub trait NodeConnector: Send + Sync {
    async fn connect(&self, endpoint: &str) -> Result<(), ConnectorError>;

    async fn disconnect(&self) -> Result<(), ConnectorError>;
}

/// The JSON types document (Driven Port)
///
/// Failures never reach the caller: `read` falls back to
/// [`DEFAULT_TYPES`] and `write` drops the error.
#[async_trait]
pub trait TypesDocument: Send + Sync {
    /// Location handed to the editor.
    fn path(&self) -> &Path;

    /// Current contents, or `"{}\n"` on any failure.
    async fn read(&self) -> String;

    /// Replace the contents. Failures are swallowed.
    async fn write(&self, contents: &str);
}

/// Opens files in the host editor (Driven Port)
#[async_trait]
pub trait EditorOpener: Send + Sync {
    async fn open(&self, path: &Path) -> Result<(), OpenerError>;
}

/// Add/edit node dialogs (Driven Port)
///
/// `None` means the user dismissed the dialog.
#[async_trait]
pub trait NodeForm: Send + Sync {
    async fn new_node(&self) -> Option<NodeRecord>;

    async fn edit_node(&self, current: &NodeRecord) -> Option<NodeRecord>;
}

/// Receives menu entries in display order.
///
/// Hosts translate these into their own native menu objects and bind each
/// item's click to `action`, so no label lookup is needed on the way back.
pub trait MenuSink<A: MenuAction> {
    fn item(&mut self, action: A, label: &str, enabled: bool);

    fn separator(&mut self);
}
