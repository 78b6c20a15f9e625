//! Dialog answers supplied on the command line.

use async_trait::async_trait;
use parking_lot::Mutex;
use substrate_nodes::{NodeForm, NodeRecord};

/// Add/edit dialog backed by a single pre-filled answer.
///
/// The shell fills the answer from the command arguments, then clicks the
/// menu item; the panel's dialog request consumes it. With no answer queued
/// the dialog counts as dismissed.
#[derive(Debug, Default)]
pub struct PromptForm {
    pending: Mutex<Option<NodeRecord>>,
}

impl PromptForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the answer for the next dialog, replacing any unused one.
    pub fn answer(&self, record: NodeRecord) {
        *self.pending.lock() = Some(record);
    }
}

#[async_trait]
impl NodeForm for PromptForm {
    async fn new_node(&self) -> Option<NodeRecord> {
        self.pending.lock().take()
    }

    async fn edit_node(&self, _current: &NodeRecord) -> Option<NodeRecord> {
        self.pending.lock().take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_is_consumed_once() {
        let form = PromptForm::new();
        form.answer(NodeRecord::new("Local", "ws://127.0.0.1:9944"));

        let first = tokio_test::block_on(form.new_node());
        let second = tokio_test::block_on(form.new_node());

        assert_eq!(first.unwrap().name, "Local");
        assert!(second.is_none());
    }
}
