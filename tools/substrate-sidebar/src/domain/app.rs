//! Shell application state.

use std::sync::Arc;

use substrate_nodes::{
    ConfigError, FsTypesDocument, MenuAction, NodeAction, NodeRecord, NodeRegistry, NodesPanel,
    OfflineConnector, PanelError, Sidebar, SidebarConfig, TabAction, TabError, DEFAULT_PANEL,
};
use thiserror::Error;
use tracing::debug;

use super::{Command, CommandError};
use crate::host::{EditorLauncher, PromptForm, TextMenu};

/// Panel wired to the shell's host collaborators.
pub type ShellPanel = NodesPanel<OfflineConnector, FsTypesDocument, EditorLauncher, PromptForm>;

/// Id of the nodes tab.
const NODES_TAB: u32 = 0;

/// Errors from executing a shell command.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Panel(#[from] PanelError),

    #[error(transparent)]
    Tab(#[from] TabError),

    #[error("No node named {0}")]
    UnknownNode(String),
}

/// Application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Running,
    Quit,
}

/// Main application model.
pub struct App {
    pub state: AppState,
    sidebar: Sidebar,
    registry: NodeRegistry,
    panel: ShellPanel,
    connector: Arc<OfflineConnector>,
    form: Arc<PromptForm>,
}

impl App {
    /// Build the app from configuration.
    pub fn new(config: &SidebarConfig, editor: EditorLauncher) -> Result<Self, ConfigError> {
        let registry = config.registry()?;
        let connector = Arc::new(OfflineConnector::new());
        let form = Arc::new(PromptForm::new());
        let panel = NodesPanel::new(
            connector.clone(),
            Arc::new(FsTypesDocument::new(&config.types_path)),
            Arc::new(editor),
            form.clone(),
        );

        Ok(Self {
            state: AppState::Running,
            sidebar: Sidebar::new(&config.panel),
            registry,
            panel,
            connector,
            form,
        })
    }

    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    pub fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    pub fn should_quit(&self) -> bool {
        self.state == AppState::Quit
    }

    /// Run one input line and return the lines to print.
    ///
    /// Errors are reported as output; the shell keeps running.
    pub async fn handle_line(&mut self, line: &str) -> Vec<String> {
        let result = match Command::parse(line) {
            Ok(Some(command)) => self.execute(command).await,
            Ok(None) => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        };

        result.unwrap_or_else(|e| vec![format!("error: {}", e)])
    }

    pub async fn execute(&mut self, command: Command) -> Result<Vec<String>, ShellError> {
        debug!(?command, "Executing");
        match command {
            Command::List => Ok(self.list()),
            Command::Status => Ok(vec![self.status().await]),
            Command::Help => Ok(help()),
            Command::Quit => {
                self.state = AppState::Quit;
                Ok(Vec::new())
            }
            Command::Add { name, endpoint } => {
                self.form.answer(NodeRecord::new(name.clone(), endpoint));
                self.panel
                    .run_tab_action(&mut self.registry, TabAction::AddNode)
                    .await?;
                Ok(vec![format!("added {}", name)])
            }
            Command::Edit {
                node,
                name,
                endpoint,
            } => {
                let current = self.node(&node)?;
                self.form.answer(NodeRecord::new(name.clone(), endpoint));
                self.panel
                    .run_node_action(&mut self.registry, NodeAction::Edit, &current)
                    .await?;
                Ok(vec![format!("edited {} -> {}", node, name)])
            }
            Command::Click { node, label } => {
                let target = self.node(&node)?;
                let fired = self.panel.click(&mut self.registry, &label, &target).await?;
                Ok(fired.map(|action| action.label().to_string()).into_iter().collect())
            }
            Command::Tab { label } => {
                let fired = self.panel.tab_click(&mut self.registry, &label).await?;
                Ok(fired.map(|action| action.label().to_string()).into_iter().collect())
            }
            Command::Menu { node } => {
                let mut menu = TextMenu::new();
                match node {
                    Some(name) => {
                        self.node(&name)?;
                        self.panel.build_context_menu(&mut menu);
                    }
                    None => self.panel.build_tab_menu(&mut menu),
                }
                Ok(menu.into_lines())
            }
            Command::Panel { label } => {
                self.sidebar.change_panel(&label);
                Ok(vec![format!("panel: {}", self.sidebar.active_panel())])
            }
            Command::Toggle { id } => {
                let open = self.sidebar.tabs.toggle_panel(id)?;
                let title = self
                    .sidebar
                    .tabs
                    .find(id)
                    .map(|panel| panel.title.clone())
                    .unwrap_or_default();
                Ok(vec![format!(
                    "{}: {}",
                    title,
                    if open { "open" } else { "collapsed" }
                )])
            }
        }
    }

    fn node(&self, name: &str) -> Result<NodeRecord, ShellError> {
        self.registry
            .get(name)
            .cloned()
            .ok_or_else(|| ShellError::UnknownNode(name.to_string()))
    }

    fn list(&self) -> Vec<String> {
        if self.sidebar.active_panel() != DEFAULT_PANEL {
            return vec![format!(
                "Nothing to show for panel {}",
                self.sidebar.active_panel()
            )];
        }

        let Some(tab) = self.sidebar.tabs.find(NODES_TAB) else {
            return vec!["Invalid tabs".to_string()];
        };
        if !tab.is_open {
            return vec![format!("{} (collapsed)", tab.title)];
        }

        let mut lines = vec![tab.title.clone()];
        if self.registry.is_empty() {
            lines.push("  No nodes found".to_string());
            return lines;
        }

        let width = self
            .registry
            .nodes()
            .iter()
            .map(|node| node.name.chars().count())
            .max()
            .unwrap_or(0);
        for entry in self.registry.entries() {
            let marker = if entry.is_selected { '*' } else { ' ' };
            let mut line = format!(
                "{} {:<width$}  {}",
                marker,
                entry.record.name,
                entry.record.endpoint,
                width = width
            );
            if entry.is_selected {
                line.push_str(if entry.is_connected {
                    "  connected"
                } else {
                    "  link down"
                });
            }
            lines.push(line);
        }
        lines
    }

    async fn status(&self) -> String {
        match (self.registry.connected_record(), self.registry.is_connected()) {
            (Some(node), true) => {
                let endpoint = self.connector.endpoint().await.unwrap_or_default();
                format!("connected to {} ({})", node.name, endpoint)
            }
            (Some(node), false) => format!("selected {} (link down)", node.name),
            (None, _) => "not connected".to_string(),
        }
    }
}

fn help() -> Vec<String> {
    [
        "list                                   show the nodes panel",
        "status                                 show the connection",
        "add <name> <endpoint>                  add a node",
        "edit <node> <new-name> <new-endpoint>  edit a node and reconnect",
        "click <node> <label...>                click a node menu item",
        "tab <label...>                         click a tab menu item",
        "menu [node]                            show a node menu, or the tab menu",
        "panel <label>                          switch sidebar panel",
        "toggle <id>                            collapse/expand a tab",
        "quit                                   leave the shell",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}
