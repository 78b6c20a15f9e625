//! End-to-end panel flows over the file-system and offline adapters.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::tempdir;

use substrate_nodes::{
    EditorOpener, FsTypesDocument, NodeAction, NodeForm, NodeRecord, NodeRegistry, NodesPanel,
    OfflineConnector, OpenerError, TypesDocument,
};

/// Form fed from a queue of answers
#[derive(Default)]
struct QueuedForm {
    answers: Mutex<Vec<NodeRecord>>,
}

impl QueuedForm {
    fn push(&self, record: NodeRecord) {
        self.answers.lock().unwrap().push(record);
    }
}

#[async_trait]
impl NodeForm for QueuedForm {
    async fn new_node(&self) -> Option<NodeRecord> {
        self.answers.lock().unwrap().pop()
    }

    async fn edit_node(&self, _current: &NodeRecord) -> Option<NodeRecord> {
        self.answers.lock().unwrap().pop()
    }
}

#[derive(Default)]
struct CountingOpener {
    opened: Mutex<usize>,
}

#[async_trait]
impl EditorOpener for CountingOpener {
    async fn open(&self, _path: &std::path::Path) -> Result<(), OpenerError> {
        *self.opened.lock().unwrap() += 1;
        Ok(())
    }
}

#[test]
fn test_registry_scenario_default_node() {
    let mut registry = NodeRegistry::new();

    registry.add_node("Default", "ws://127.0.0.1:9944").unwrap();
    registry.set_connected(Some("Default"));
    assert!(registry.is_connected_to("Default"));

    registry.remove_node("Default").unwrap();
    assert_eq!(registry.connected_node(), None);
    assert!(!registry.is_connected());
    assert!(registry.nodes().is_empty());
}

#[tokio::test]
async fn test_panel_scenario_add_connect_edit_remove() {
    let dir = tempdir().unwrap();
    let connector = Arc::new(OfflineConnector::new());
    let types = Arc::new(FsTypesDocument::new(dir.path().join("types.json")));
    let opener = Arc::new(CountingOpener::default());
    let form = Arc::new(QueuedForm::default());
    let panel = NodesPanel::new(connector.clone(), types.clone(), opener.clone(), form.clone());
    let mut registry = NodeRegistry::new();

    form.push(NodeRecord::new("Default", "ws://127.0.0.1:9944"));
    panel.tab_click(&mut registry, "Add node").await.unwrap();
    let node = registry.get("Default").unwrap().clone();

    let action = panel
        .click(&mut registry, "Connect to node", &node)
        .await
        .unwrap();
    assert_eq!(action, Some(NodeAction::Connect));
    assert!(registry.is_connected_to("Default"));
    assert_eq!(
        connector.endpoint().await.as_deref(),
        Some("ws://127.0.0.1:9944")
    );

    form.push(NodeRecord::new("Local", "ws://localhost:9944"));
    panel.click(&mut registry, "Edit node", &node).await.unwrap();
    assert!(registry.is_connected_to("Local"));
    assert_eq!(
        connector.endpoint().await.as_deref(),
        Some("ws://localhost:9944")
    );

    let local = registry.get("Local").unwrap().clone();
    panel.click(&mut registry, "Remove node", &local).await.unwrap();
    assert!(registry.is_empty());
    assert_eq!(registry.connected_node(), None);
    assert_eq!(connector.endpoint().await, None);
}

#[tokio::test]
async fn test_edit_types_creates_document() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("substrate").join("types.json");
    let types = Arc::new(FsTypesDocument::new(&path));
    let opener = Arc::new(CountingOpener::default());
    let panel = NodesPanel::new(
        Arc::new(OfflineConnector::new()),
        types.clone(),
        opener.clone(),
        Arc::new(QueuedForm::default()),
    );
    let mut registry = NodeRegistry::new();

    panel.tab_click(&mut registry, "Edit types").await.unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}\n");
    assert_eq!(*opener.opened.lock().unwrap(), 1);

    std::fs::write(&path, "{\"Balance\": \"u128\"}\n").unwrap();
    panel.edit_types().await.unwrap();
    assert_eq!(types.read().await, "{\"Balance\": \"u128\"}\n");
    assert_eq!(*opener.opened.lock().unwrap(), 2);
}
