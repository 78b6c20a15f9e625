//! Node registry
//!
//! The authoritative list of configured nodes plus the single
//! "currently connected" pointer. The registry is owned by the caller (the
//! application store) and passed by `&mut` into every operation.
//!
//! ## Invariants
//!
//! - Node names are unique.
//! - Insertion order is display order; edits replace in place.
//! - `is_connected` is only true while `connected_node` is set.
//! - Removing the connected node clears `connected_node` and `is_connected`.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::NodeRecord;
use crate::error::RegistryError;

/// Row data for one node in the panel list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeEntry<'a> {
    pub record: &'a NodeRecord,
    /// This node is the selected (connected) one
    pub is_selected: bool,
    /// The link to the selected node is currently up
    pub is_connected: bool,
}

/// Ordered registry of node records.
///
/// Deserialization goes through [`RegistrySnapshot`] so a restored store
/// holds the same invariants as one built with `add_node`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RegistrySnapshot")]
pub struct NodeRegistry {
    nodes: Vec<NodeRecord>,
    connected_node: Option<String>,
    is_connected: bool,
}

/// Saved store state, as written by `NodeRegistry`'s `Serialize`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegistrySnapshot {
    pub nodes: Vec<NodeRecord>,
    pub connected_node: Option<String>,
    pub is_connected: bool,
}

impl TryFrom<RegistrySnapshot> for NodeRegistry {
    type Error = RegistryError;

    /// Rebuild the list through `add_node`. The link flag only survives
    /// alongside a selected node.
    fn try_from(snapshot: RegistrySnapshot) -> Result<Self, Self::Error> {
        let mut registry = Self::with_nodes(snapshot.nodes)?;
        if let Some(name) = snapshot.connected_node.as_deref() {
            registry.set_connected(Some(name));
            registry.set_link_status(snapshot.is_connected);
        }
        Ok(registry)
    }
}

impl NodeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from seed records, rejecting duplicate names.
    pub fn with_nodes<I>(records: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = NodeRecord>,
    {
        let mut registry = Self::new();
        for record in records {
            registry.add_node(record.name, record.endpoint)?;
        }
        Ok(registry)
    }

    /// Append a new record to the end of the list.
    ///
    /// # Errors
    ///
    /// `DuplicateName` if a record with `name` already exists. The registry
    /// is left unchanged in that case.
    pub fn add_node(
        &mut self,
        name: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.position(&name).is_some() {
            return Err(RegistryError::DuplicateName { name });
        }

        let record = NodeRecord::new(name, endpoint);
        debug!(name = %record.name, endpoint = %record.endpoint, "Node added");
        self.nodes.push(record);
        Ok(())
    }

    /// Replace the record named `old_name` with `record`, keeping its position.
    ///
    /// The connected-node pointer is not touched; a caller renaming the
    /// connected node must call `set_connected` with the new name.
    ///
    /// # Errors
    ///
    /// - `NotFound` if `old_name` is absent
    /// - `DuplicateName` if `record.name` belongs to a different record
    pub fn edit_node(&mut self, old_name: &str, record: NodeRecord) -> Result<(), RegistryError> {
        let index = self
            .position(old_name)
            .ok_or_else(|| RegistryError::NotFound {
                name: old_name.to_string(),
            })?;

        if record.name != old_name && self.position(&record.name).is_some() {
            return Err(RegistryError::DuplicateName { name: record.name });
        }

        debug!(old = old_name, name = %record.name, endpoint = %record.endpoint, "Node edited");
        self.nodes[index] = record;
        Ok(())
    }

    /// Delete the record named `name` and return it.
    ///
    /// If it was the connected node the connection state is cleared as well.
    ///
    /// # Errors
    ///
    /// `NotFound` if `name` is absent; `nodes` is left unchanged.
    pub fn remove_node(&mut self, name: &str) -> Result<NodeRecord, RegistryError> {
        let index = self.position(name).ok_or_else(|| RegistryError::NotFound {
            name: name.to_string(),
        })?;

        if self.connected_node.as_deref() == Some(name) {
            self.disconnect();
        }

        debug!(name, "Node removed");
        Ok(self.nodes.remove(index))
    }

    /// Select the connected node, or clear the selection with `None`.
    ///
    /// Selecting a node marks the link as established; clearing marks it
    /// down. The name is not checked against the list: callers must only
    /// pass names they obtained from this registry.
    pub fn set_connected(&mut self, name: Option<&str>) {
        match name {
            Some(name) => {
                if self.position(name).is_none() {
                    warn!(name, "Selecting a node that is not in the registry");
                }
                self.connected_node = Some(name.to_string());
                self.is_connected = true;
            }
            None => {
                self.connected_node = None;
                self.is_connected = false;
            }
        }
    }

    /// Clear the connected node.
    pub fn disconnect(&mut self) {
        self.set_connected(None);
    }

    /// Report the link state for the selected node.
    ///
    /// Ignored when no node is selected so that `is_connected` never
    /// outlives the selection.
    pub fn set_link_status(&mut self, up: bool) {
        if self.connected_node.is_some() {
            self.is_connected = up;
        }
    }

    /// True iff `name` is the selected node and the link is up.
    pub fn is_connected_to(&self, name: &str) -> bool {
        self.is_connected && self.connected_node.as_deref() == Some(name)
    }

    pub fn connected_node(&self) -> Option<&str> {
        self.connected_node.as_deref()
    }

    pub fn is_connected(&self) -> bool {
        self.is_connected
    }

    /// The selected node's record, if it is still in the list.
    pub fn connected_record(&self) -> Option<&NodeRecord> {
        self.connected_node.as_deref().and_then(|name| self.get(name))
    }

    pub fn get(&self, name: &str) -> Option<&NodeRecord> {
        self.nodes.iter().find(|node| node.name == name)
    }

    pub fn nodes(&self) -> &[NodeRecord] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Per-row view of the list in display order.
    pub fn entries(&self) -> impl Iterator<Item = NodeEntry<'_>> + '_ {
        self.nodes.iter().map(move |record| NodeEntry {
            record,
            is_selected: self.connected_node.as_deref() == Some(record.name.as_str()),
            is_connected: self.is_connected,
        })
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.nodes.iter().position(|node| node.name == name)
    }
}
