//! Node record

use serde::{Deserialize, Serialize};

/// A named network endpoint the sidebar can connect to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Unique name within a registry (primary key)
    pub name: String,
    /// Connection URL, e.g. `ws://127.0.0.1:9944`
    pub endpoint: String,
}

impl NodeRecord {
    pub fn new(name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
        }
    }
}

impl std::fmt::Display for NodeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.endpoint)
    }
}
