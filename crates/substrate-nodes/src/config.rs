//! # Sidebar Configuration
//!
//! Sources, in increasing priority:
//!
//! 1. Built-in defaults (one `Default` node on `ws://127.0.0.1:9944`)
//! 2. A TOML file
//! 3. Environment (`SUBSTRATE_TYPES_PATH`)
//!
//! Command-line flags are applied on top by the binary.
//!
//! # Config File Format
//!
//! ```toml
//! types_path = "/home/me/.config/substrate/types.json"
//! panel = "nodes"
//!
//! [[nodes]]
//! name = "Default"
//! endpoint = "ws://127.0.0.1:9944"
//!
//! [[nodes]]
//! name = "Remote"
//! endpoint = "wss://rpc.example.org"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::{NodeRecord, NodeRegistry, DEFAULT_PANEL};
use crate::error::RegistryError;

/// Environment variable overriding the types document location.
pub const TYPES_PATH_ENV: &str = "SUBSTRATE_TYPES_PATH";

/// Name of the node seeded when no config is given.
pub const DEFAULT_NODE_NAME: &str = "Default";

/// Endpoint of the node seeded when no config is given.
pub const DEFAULT_NODE_ENDPOINT: &str = "ws://127.0.0.1:9944";

/// Errors that can occur during config loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid node list: {0}")]
    Nodes(#[from] RegistryError),
}

/// Sidebar configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarConfig {
    /// Location of the JSON types document.
    pub types_path: PathBuf,
    /// Nodes present when the sidebar starts, in display order.
    pub nodes: Vec<NodeRecord>,
    /// Panel shown first.
    pub panel: String,
}

/// Configuration file structure.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    types_path: Option<PathBuf>,
    panel: Option<String>,
    nodes: Option<Vec<NodeRecord>>,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            types_path: default_types_path(),
            nodes: vec![NodeRecord::new(DEFAULT_NODE_NAME, DEFAULT_NODE_ENDPOINT)],
            panel: DEFAULT_PANEL.to_string(),
        }
    }
}

impl SidebarConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.display().to_string(),
                source,
            })?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string. Missing keys keep defaults.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        let defaults = Self::default();
        Ok(Self {
            types_path: file.types_path.unwrap_or(defaults.types_path),
            nodes: file.nodes.unwrap_or(defaults.nodes),
            panel: file.panel.unwrap_or(defaults.panel),
        })
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides using `lookup` to read variables.
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(TYPES_PATH_ENV).filter(|p| !p.trim().is_empty()) {
            self.types_path = PathBuf::from(path);
        }
    }

    /// Build the initial registry from the configured nodes.
    ///
    /// # Errors
    ///
    /// `ConfigError::Nodes` if two configured nodes share a name.
    pub fn registry(&self) -> Result<NodeRegistry, ConfigError> {
        Ok(NodeRegistry::with_nodes(self.nodes.iter().cloned())?)
    }
}

/// `<config dir>/substrate/types.json`, or `./types.json` without one.
pub fn default_types_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("substrate").join("types.json"))
        .unwrap_or_else(|| PathBuf::from("types.json"))
}
