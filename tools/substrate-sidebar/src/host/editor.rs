//! Opens the types document in an external editor.

use std::path::Path;

use async_trait::async_trait;
use substrate_nodes::{EditorOpener, OpenerError};
use tokio::process::Command;
use tracing::info;

/// Launches `$VISUAL` / `$EDITOR` on a file and waits for it to exit.
///
/// Without an editor the path is only logged.
#[derive(Debug, Clone, Default)]
pub struct EditorLauncher {
    editor: Option<String>,
}

impl EditorLauncher {
    pub fn new(editor: Option<String>) -> Self {
        Self {
            editor: editor.filter(|e| !e.trim().is_empty()),
        }
    }

    /// Pick the editor from `$VISUAL`, then `$EDITOR`.
    pub fn from_env() -> Self {
        let editor = std::env::var("VISUAL")
            .ok()
            .filter(|e| !e.trim().is_empty())
            .or_else(|| std::env::var("EDITOR").ok());
        Self::new(editor)
    }

    pub fn editor(&self) -> Option<&str> {
        self.editor.as_deref()
    }
}

#[async_trait]
impl EditorOpener for EditorLauncher {
    async fn open(&self, path: &Path) -> Result<(), OpenerError> {
        let Some(editor) = &self.editor else {
            info!(path = %path.display(), "No editor configured; types document left in place");
            return Ok(());
        };

        let status = Command::new(editor)
            .arg(path)
            .status()
            .await
            .map_err(|source| OpenerError::Launch {
                editor: editor.clone(),
                source,
            })?;

        if !status.success() {
            return Err(OpenerError::Exit {
                editor: editor.clone(),
                status: status.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_editor_is_none() {
        assert_eq!(EditorLauncher::new(Some("   ".to_string())).editor(), None);
        assert_eq!(EditorLauncher::new(Some("vi".to_string())).editor(), Some("vi"));
    }

    #[test]
    fn test_no_editor_is_ok() {
        let launcher = EditorLauncher::new(None);
        let result = tokio_test::block_on(launcher.open(Path::new("/tmp/types.json")));
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_missing_editor_binary_fails_to_launch() {
        let launcher = EditorLauncher::new(Some("/nonexistent/editor-binary".to_string()));
        let result = launcher.open(Path::new("/tmp/types.json")).await;
        assert!(matches!(result, Err(OpenerError::Launch { .. })));
    }
}
