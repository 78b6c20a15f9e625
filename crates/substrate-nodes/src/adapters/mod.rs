//! Adapters Layer (Driven Adapters)
//!
//! Implementations of driven ports that do not need an editor host.
//!
//! ## Adapters
//!
//! - `FsTypesDocument` - Types document stored on the local file system
//! - `OfflineConnector` - Connector that tracks the selected endpoint without
//!   opening a network link

pub mod fs_types;
pub mod offline;

pub use fs_types::FsTypesDocument;
pub use offline::OfflineConnector;
