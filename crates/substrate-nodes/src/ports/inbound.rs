//! Inbound Ports (Driving Ports)
//!
//! The registry operations a host store must provide. `NodeRegistry`
//! implements this directly; a host that keeps its state elsewhere can wrap
//! its store and hand that to the panel instead.

use crate::domain::{NodeRecord, NodeRegistry};
use crate::error::RegistryError;

/// Node registry API (Driving Port)
///
/// All operations are synchronous in-memory mutations.
pub trait NodeRegistryApi {
    /// Append a node. Fails with `DuplicateName` if `name` is taken.
    fn add_node(&mut self, name: &str, endpoint: &str) -> Result<(), RegistryError>;

    /// Replace a node in place. Fails with `NotFound` if `old_name` is absent.
    ///
    /// Does not update the connected node.
    fn edit_node(&mut self, old_name: &str, record: NodeRecord) -> Result<(), RegistryError>;

    /// Delete a node, clearing the connection if it was the connected one.
    fn remove_node(&mut self, name: &str) -> Result<NodeRecord, RegistryError>;

    /// Select the connected node (`None` clears). Not validated.
    fn set_connected(&mut self, name: Option<&str>);

    /// Report whether the link to the selected node is up.
    fn set_link_status(&mut self, up: bool);

    /// True iff `name` is selected and the link is up.
    fn is_connected_to(&self, name: &str) -> bool;

    fn connected_node(&self) -> Option<&str>;

    fn get(&self, name: &str) -> Option<&NodeRecord>;
}

impl NodeRegistryApi for NodeRegistry {
    fn add_node(&mut self, name: &str, endpoint: &str) -> Result<(), RegistryError> {
        NodeRegistry::add_node(self, name, endpoint)
    }

    fn edit_node(&mut self, old_name: &str, record: NodeRecord) -> Result<(), RegistryError> {
        NodeRegistry::edit_node(self, old_name, record)
    }

    fn remove_node(&mut self, name: &str) -> Result<NodeRecord, RegistryError> {
        NodeRegistry::remove_node(self, name)
    }

    fn set_connected(&mut self, name: Option<&str>) {
        NodeRegistry::set_connected(self, name)
    }

    fn set_link_status(&mut self, up: bool) {
        NodeRegistry::set_link_status(self, up)
    }

    fn is_connected_to(&self, name: &str) -> bool {
        NodeRegistry::is_connected_to(self, name)
    }

    fn connected_node(&self) -> Option<&str> {
        NodeRegistry::connected_node(self)
    }

    fn get(&self, name: &str) -> Option<&NodeRecord> {
        NodeRegistry::get(self, name)
    }
}
