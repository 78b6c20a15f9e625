//! Ports Layer
//!
//! Defines the interfaces (traits) for:
//! - Driving Ports (inbound) - registry API the panel drives
//! - Driven Ports (outbound) - collaborators owned by the editor host

pub mod inbound;
pub mod outbound;

pub use inbound::NodeRegistryApi;
pub use outbound::{EditorOpener, MenuSink, NodeConnector, NodeForm, TypesDocument, DEFAULT_TYPES};
