//! Menus and label dispatch
//!
//! Menu items carry a tagged action plus the label shown to the user. When
//! the host reports a click it hands back only the label; `resolve` maps it
//! to the action with a linear scan in registration order:
//!
//! - separators are skipped
//! - the first item whose label matches exactly (case-sensitive) wins
//! - an unknown label resolves to nothing and is not an error

/// An action enum that can appear in a menu.
pub trait MenuAction: Copy + Eq + std::fmt::Debug {
    /// Default display label.
    fn label(&self) -> &'static str;
}

/// Actions offered per node in the node list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeAction {
    Connect,
    Edit,
    Remove,
}

impl MenuAction for NodeAction {
    fn label(&self) -> &'static str {
        match self {
            Self::Connect => "Connect to node",
            Self::Edit => "Edit node",
            Self::Remove => "Remove node",
        }
    }
}

/// Actions offered by the nodes tab header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabAction {
    AddNode,
    EditTypes,
    Disconnect,
}

impl MenuAction for TabAction {
    fn label(&self) -> &'static str {
        match self {
            Self::AddNode => "Add node",
            Self::EditTypes => "Edit types",
            Self::Disconnect => "Disconnect from node",
        }
    }
}

/// One entry of a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem<A> {
    Action {
        action: A,
        label: String,
        enabled: bool,
    },
    Separator,
}

impl<A: MenuAction> MenuItem<A> {
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Action { label, .. } => Some(label.as_str()),
            Self::Separator => None,
        }
    }
}

/// Ordered, fixed-at-startup list of menu items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu<A> {
    items: Vec<MenuItem<A>>,
}

/// Per-node context menu.
pub type ContextMenu = Menu<NodeAction>;

/// Nodes tab actions menu.
pub type TabMenu = Menu<TabAction>;

impl<A: MenuAction> Default for Menu<A> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<A: MenuAction> Menu<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an enabled item using the action's default label.
    pub fn action(self, action: A) -> Self {
        let label = action.label();
        self.labeled(action, label)
    }

    /// Append an enabled item with a custom label.
    pub fn labeled(mut self, action: A, label: impl Into<String>) -> Self {
        self.items.push(MenuItem::Action {
            action,
            label: label.into(),
            enabled: true,
        });
        self
    }

    /// Append a disabled item using the action's default label.
    pub fn disabled(mut self, action: A) -> Self {
        self.items.push(MenuItem::Action {
            action,
            label: action.label().to_string(),
            enabled: false,
        });
        self
    }

    pub fn separator(mut self) -> Self {
        self.items.push(MenuItem::Separator);
        self
    }

    pub fn items(&self) -> &[MenuItem<A>] {
        &self.items
    }

    /// Labels of all actions in order, separators omitted.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().filter_map(MenuItem::label)
    }

    /// Map a clicked label to its action.
    pub fn resolve(&self, label: &str) -> Option<A> {
        self.items.iter().find_map(|item| match item {
            MenuItem::Action {
                action, label: l, ..
            } if l == label => Some(*action),
            _ => None,
        })
    }

    /// Resolve `label` and invoke `handler` once for the matching action.
    ///
    /// Returns the action that fired, or `None` when nothing matched.
    pub fn dispatch<T, F>(&self, label: &str, target: &T, mut handler: F) -> Option<A>
    where
        T: ?Sized,
        F: FnMut(A, &T),
    {
        let action = self.resolve(label)?;
        handler(action, target);
        Some(action)
    }
}

impl ContextMenu {
    /// `Connect to node`, `Edit node`, separator, `Remove node`.
    pub fn node_default() -> Self {
        Self::new()
            .action(NodeAction::Connect)
            .action(NodeAction::Edit)
            .separator()
            .action(NodeAction::Remove)
    }
}

impl TabMenu {
    /// `Add node`, separator, `Edit types`, `Disconnect from node`, separator.
    pub fn tab_default() -> Self {
        Self::new()
            .action(TabAction::AddNode)
            .separator()
            .action(TabAction::EditTypes)
            .action(TabAction::Disconnect)
            .separator()
    }
}
