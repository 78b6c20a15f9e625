//! Sidebar panel selection and collapsible tabs.

use serde::{Deserialize, Serialize};

use crate::error::TabError;

/// Panel shown when the sidebar opens.
pub const DEFAULT_PANEL: &str = "nodes";

/// A collapsible section of the sidebar body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabPanel {
    pub id: u32,
    pub title: String,
    pub is_open: bool,
}

/// All tabs of the sidebar body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabsState {
    pub panels: Vec<TabPanel>,
}

impl Default for TabsState {
    fn default() -> Self {
        Self {
            panels: vec![TabPanel {
                id: 0,
                title: "Nodes".to_string(),
                is_open: true,
            }],
        }
    }
}

impl TabsState {
    pub fn find(&self, id: u32) -> Option<&TabPanel> {
        self.panels.iter().find(|panel| panel.id == id)
    }

    /// Flip a panel between open and collapsed, returning the new state.
    pub fn toggle_panel(&mut self, id: u32) -> Result<bool, TabError> {
        let panel = self
            .panels
            .iter_mut()
            .find(|panel| panel.id == id)
            .ok_or(TabError::UnknownPanel(id))?;
        panel.is_open = !panel.is_open;
        Ok(panel.is_open)
    }
}

/// Sidebar header state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sidebar {
    active_panel: String,
    pub tabs: TabsState,
}

impl Default for Sidebar {
    fn default() -> Self {
        Self::new(DEFAULT_PANEL)
    }
}

impl Sidebar {
    pub fn new(panel: &str) -> Self {
        Self {
            active_panel: panel.to_lowercase(),
            tabs: TabsState::default(),
        }
    }

    pub fn active_panel(&self) -> &str {
        &self.active_panel
    }

    /// Switch the body panel. Header buttons pass display-cased names.
    pub fn change_panel(&mut self, label: &str) {
        self.active_panel = label.to_lowercase();
    }
}
