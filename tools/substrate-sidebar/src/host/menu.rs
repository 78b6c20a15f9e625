//! Plain-text menu sink.

use substrate_nodes::{MenuAction, MenuSink};

/// Collects menu entries as indented text lines.
#[derive(Debug, Default)]
pub struct TextMenu {
    lines: Vec<String>,
}

impl TextMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl<A: MenuAction> MenuSink<A> for TextMenu {
    fn item(&mut self, _action: A, label: &str, enabled: bool) {
        if enabled {
            self.lines.push(format!("  {}", label));
        } else {
            self.lines.push(format!("  {} (disabled)", label));
        }
    }

    fn separator(&mut self) {
        self.lines.push("  ----".to_string());
    }
}
