//! Domain Layer - Pure sidebar state
//!
//! This layer contains:
//! - Node records and the node registry
//! - Context and tab menus with label dispatch
//! - Sidebar panel selection and collapsible tabs
//!
//! RULES:
//! - No I/O operations
//! - No async code

pub mod menu;
pub mod node;
pub mod registry;
pub mod sidebar;

pub use menu::{ContextMenu, Menu, MenuAction, MenuItem, NodeAction, TabAction, TabMenu};
pub use node::NodeRecord;
pub use registry::{NodeEntry, NodeRegistry, RegistrySnapshot};
pub use sidebar::{Sidebar, TabPanel, TabsState, DEFAULT_PANEL};
