//! File-system types document

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::ports::{TypesDocument, DEFAULT_TYPES};

/// Types document backed by a JSON file.
///
/// Read failures fall back to `"{}\n"` so the editor always starts from
/// valid JSON. Write failures are logged at debug level and dropped.
#[derive(Debug, Clone)]
pub struct FsTypesDocument {
    path: PathBuf,
}

impl FsTypesDocument {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TypesDocument for FsTypesDocument {
    fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> String {
        match fs::read(&self.path).await {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "Types document unreadable, using default");
                DEFAULT_TYPES.to_string()
            }
        }
    }

    async fn write(&self, contents: &str) {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(e) = fs::create_dir_all(parent).await {
                debug!(path = %parent.display(), error = %e, "Failed to create types directory");
                return;
            }
        }

        if let Err(e) = fs::write(&self.path, contents).await {
            debug!(path = %self.path.display(), error = %e, "Failed to write types document");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_file_reads_default() {
        let dir = tempdir().unwrap();
        let doc = FsTypesDocument::new(dir.path().join("types.json"));

        assert_eq!(doc.read().await, "{}\n");
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let doc = FsTypesDocument::new(dir.path().join("nested").join("types.json"));

        doc.write("{\"Address\": \"AccountId\"}\n").await;

        assert_eq!(doc.read().await, "{\"Address\": \"AccountId\"}\n");
    }

    #[tokio::test]
    async fn test_write_failure_is_swallowed() {
        let dir = tempdir().unwrap();
        // A directory cannot be overwritten as a file
        let doc = FsTypesDocument::new(dir.path());

        doc.write("{}\n").await;

        assert!(dir.path().is_dir());
        assert_eq!(doc.read().await, "{}\n");
    }
}
