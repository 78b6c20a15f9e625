//! Nodes Panel Service
//!
//! Orchestrates the nodes panel: resolves menu labels, applies the resulting
//! action to a caller-owned registry and drives the host collaborators.
//!
//! ## Action semantics
//!
//! | Action               | Registry                         | Host                         |
//! |----------------------|----------------------------------|------------------------------|
//! | Connect to node      | select node                      | connect to its endpoint      |
//! | Edit node            | replace in place, select new name| connect to the new endpoint  |
//! | Remove node          | delete (clears selection)        | disconnect if it was selected|
//! | Add node             | append                           | -                            |
//! | Disconnect from node | clear selection                  | disconnect                   |
//! | Edit types           | -                                | read, write back, open       |

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{ContextMenu, Menu, MenuAction, MenuItem, NodeAction, NodeRecord, TabAction, TabMenu};
use crate::error::PanelError;
use crate::ports::{EditorOpener, MenuSink, NodeConnector, NodeForm, NodeRegistryApi, TypesDocument};

/// Nodes panel service
///
/// Holds the fixed menus and the host collaborators. The registry itself is
/// passed into every call; the panel keeps no copy of it.
pub struct NodesPanel<C, D, E, F>
where
    C: NodeConnector,
    D: TypesDocument,
    E: EditorOpener,
    F: NodeForm,
{
    connector: Arc<C>,
    types: Arc<D>,
    opener: Arc<E>,
    form: Arc<F>,
    context_menu: ContextMenu,
    tab_menu: TabMenu,
}

impl<C, D, E, F> NodesPanel<C, D, E, F>
where
    C: NodeConnector,
    D: TypesDocument,
    E: EditorOpener,
    F: NodeForm,
{
    /// Create a panel with the default context and tab menus.
    pub fn new(connector: Arc<C>, types: Arc<D>, opener: Arc<E>, form: Arc<F>) -> Self {
        Self {
            connector,
            types,
            opener,
            form,
            context_menu: ContextMenu::node_default(),
            tab_menu: TabMenu::tab_default(),
        }
    }

    /// Replace the per-node context menu.
    pub fn with_context_menu(mut self, menu: ContextMenu) -> Self {
        self.context_menu = menu;
        self
    }

    /// Replace the tab actions menu.
    pub fn with_tab_menu(mut self, menu: TabMenu) -> Self {
        self.tab_menu = menu;
        self
    }

    pub fn context_menu(&self) -> &ContextMenu {
        &self.context_menu
    }

    pub fn tab_menu(&self) -> &TabMenu {
        &self.tab_menu
    }

    pub fn types(&self) -> &D {
        &self.types
    }

    /// Emit the per-node context menu into a host menu.
    pub fn build_context_menu(&self, sink: &mut dyn MenuSink<NodeAction>) {
        emit(&self.context_menu, sink);
    }

    /// Emit the tab actions menu into a host menu.
    pub fn build_tab_menu(&self, sink: &mut dyn MenuSink<TabAction>) {
        emit(&self.tab_menu, sink);
    }

    /// Handle a click on a node's context menu.
    ///
    /// Unknown labels are ignored and return `Ok(None)`.
    pub async fn click<R: NodeRegistryApi>(
        &self,
        registry: &mut R,
        label: &str,
        node: &NodeRecord,
    ) -> Result<Option<NodeAction>, PanelError> {
        let Some(action) = self.context_menu.resolve(label) else {
            debug!(label, node = %node.name, "No context action for label");
            return Ok(None);
        };
        self.run_node_action(registry, action, node).await?;
        Ok(Some(action))
    }

    /// Handle a click on the tab actions menu.
    ///
    /// Unknown labels are ignored and return `Ok(None)`.
    pub async fn tab_click<R: NodeRegistryApi>(
        &self,
        registry: &mut R,
        label: &str,
    ) -> Result<Option<TabAction>, PanelError> {
        let Some(action) = self.tab_menu.resolve(label) else {
            debug!(label, "No tab action for label");
            return Ok(None);
        };
        self.run_tab_action(registry, action).await?;
        Ok(Some(action))
    }

    pub async fn run_node_action<R: NodeRegistryApi>(
        &self,
        registry: &mut R,
        action: NodeAction,
        node: &NodeRecord,
    ) -> Result<(), PanelError> {
        match action {
            NodeAction::Connect => self.connect_to_node(registry, node).await,
            NodeAction::Edit => self.edit_node(registry, node).await,
            NodeAction::Remove => self.remove_node(registry, node).await,
        }
    }

    pub async fn run_tab_action<R: NodeRegistryApi>(
        &self,
        registry: &mut R,
        action: TabAction,
    ) -> Result<(), PanelError> {
        match action {
            TabAction::AddNode => self.add_node(registry).await,
            TabAction::EditTypes => self.edit_types().await,
            TabAction::Disconnect => self.disconnect(registry).await,
        }
    }

    /// Select `node` and bring its link up.
    ///
    /// If the connector fails the node stays selected with the link down.
    pub async fn connect_to_node<R: NodeRegistryApi>(
        &self,
        registry: &mut R,
        node: &NodeRecord,
    ) -> Result<(), PanelError> {
        registry.set_connected(Some(node.name.as_str()));

        if let Err(e) = self.connector.connect(&node.endpoint).await {
            warn!(node = %node.name, endpoint = %node.endpoint, error = %e, "Failed to connect");
            registry.set_link_status(false);
            return Err(e.into());
        }

        info!(node = %node.name, endpoint = %node.endpoint, "Connected to node");
        Ok(())
    }

    /// Ask the host for new values, replace the node, then connect to it.
    pub async fn edit_node<R: NodeRegistryApi>(
        &self,
        registry: &mut R,
        node: &NodeRecord,
    ) -> Result<(), PanelError> {
        let Some(updated) = self.form.edit_node(node).await else {
            debug!(node = %node.name, "Edit dialog dismissed");
            return Ok(());
        };

        registry.edit_node(&node.name, updated.clone())?;
        self.connect_to_node(registry, &updated).await
    }

    /// Delete `node`, dropping the link if it was the connected one.
    pub async fn remove_node<R: NodeRegistryApi>(
        &self,
        registry: &mut R,
        node: &NodeRecord,
    ) -> Result<(), PanelError> {
        let was_connected = registry.connected_node() == Some(node.name.as_str());

        registry.remove_node(&node.name)?;

        if was_connected {
            // The record is already gone; a failed disconnect is only logged.
            if let Err(e) = self.connector.disconnect().await {
                warn!(node = %node.name, error = %e, "Failed to disconnect removed node");
            }
        }

        info!(node = %node.name, "Removed node");
        Ok(())
    }

    /// Ask the host for a new node and append it.
    pub async fn add_node<R: NodeRegistryApi>(&self, registry: &mut R) -> Result<(), PanelError> {
        let Some(node) = self.form.new_node().await else {
            debug!("Add dialog dismissed");
            return Ok(());
        };

        registry.add_node(&node.name, &node.endpoint)?;
        info!(node = %node.name, endpoint = %node.endpoint, "Added node");
        Ok(())
    }

    /// Clear the connected node and drop the link.
    pub async fn disconnect<R: NodeRegistryApi>(&self, registry: &mut R) -> Result<(), PanelError> {
        let Some(name) = registry.connected_node().map(str::to_string) else {
            debug!("Disconnect requested with no connected node");
            return Ok(());
        };

        registry.set_connected(None);
        self.connector.disconnect().await?;
        info!(node = %name, "Disconnected from node");
        Ok(())
    }

    /// Make sure the types document exists and open it in the editor.
    pub async fn edit_types(&self) -> Result<(), PanelError> {
        let contents = self.types.read().await;
        self.types.write(&contents).await;
        self.opener.open(self.types.path()).await?;
        debug!(path = %self.types.path().display(), "Opened types document");
        Ok(())
    }
}

fn emit<A: MenuAction>(menu: &Menu<A>, sink: &mut dyn MenuSink<A>) {
    for item in menu.items() {
        match item {
            MenuItem::Action {
                action,
                label,
                enabled,
            } => sink.item(*action, label, *enabled),
            MenuItem::Separator => sink.separator(),
        }
    }
}
