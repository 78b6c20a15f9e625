//! # Substrate Nodes
//!
//! Node registry and menu dispatch for the Substrate sidebar panel.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure state, no I/O
//!   - `NodeRegistry`: Ordered node records plus the connected-node pointer
//!   - `Menu`: Context and tab menus resolved by label
//!   - `Sidebar` / `TabsState`: Active panel and collapsible tabs
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `NodeRegistryApi`: Driving port over the registry
//!   - `NodeConnector`, `TypesDocument`, `EditorOpener`, `NodeForm`,
//!     `MenuSink`: Driven ports owned by the host
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `NodesPanel`: Runs menu actions against the registry and the host
//!
//! - **Adapters Layer** (`adapters/`): Concrete collaborators
//!   - `FsTypesDocument`: Types document on the local file system
//!   - `OfflineConnector`: Connector that only records the selected endpoint
//!
//! ## Invariants
//!
//! - Node names are unique within a registry.
//! - `is_connected` is only ever true while a node is selected.
//! - Removing the selected node clears the selection.
//!
//! ## Usage Example
//!
//! ```ignore
//! use substrate_nodes::{NodeRegistry, ContextMenu, NodeAction};
//!
//! let mut registry = NodeRegistry::new();
//! registry.add_node("Default", "ws://127.0.0.1:9944")?;
//! registry.set_connected(Some("Default"));
//! assert!(registry.is_connected_to("Default"));
//!
//! let menu = ContextMenu::node_default();
//! assert_eq!(menu.resolve("Remove node"), Some(NodeAction::Remove));
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use config::{ConfigError, SidebarConfig};
pub use domain::{
    ContextMenu, Menu, MenuAction, MenuItem, NodeAction, NodeEntry, NodeRecord, NodeRegistry,
    RegistrySnapshot, Sidebar, TabAction, TabMenu, TabPanel, TabsState, DEFAULT_PANEL,
};
pub use error::{ConnectorError, OpenerError, PanelError, RegistryError, TabError};
pub use ports::{
    EditorOpener, MenuSink, NodeConnector, NodeForm, NodeRegistryApi, TypesDocument,
    DEFAULT_TYPES,
};
pub use service::NodesPanel;

pub use adapters::{FsTypesDocument, OfflineConnector};
