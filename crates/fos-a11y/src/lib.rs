//! fOS Accessibility
//!
//! Accessible Object Model for the fOS inspector.
//!
//! Features:
//! - Arena AOM tree with label relations
//! - Content-bearing sibling positions
//! - Focus state and tab index
//! - JSON snapshots

pub mod aom;
pub mod focus;
pub mod snapshot;

pub use aom::{AomNode, AomNodeId, AomNodeKind, AomTree, Relations};
pub use focus::{FocusAnchor, FocusIndicator, FocusManager, FocusStyle, TabIndex};
pub use snapshot::{Snapshot, SnapshotElement, SnapshotNode, SnapshotText};

/// Accessibility error
#[derive(Debug, thiserror::Error)]
pub enum A11yError {
    #[error("Duplicate node key: {0}")]
    DuplicateKey(String),

    #[error("Node {label} labels unknown node {target}")]
    UnknownLabelTarget { label: String, target: String },

    #[error("Node {0} labels itself")]
    SelfLabel(String),

    #[error("Snapshot root must be an element")]
    TextRoot,

    #[error("Invalid snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}
