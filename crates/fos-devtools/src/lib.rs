//! fOS DevTools
//!
//! Accessibility inspector for the fOS browser engine.
//!
//! Features:
//! - AOM view for nodes without a dedicated renderer
//! - Focus framing with role marker and authored-name header
//! - Collapsing of labels that repeat their target's name
//! - Click-to-inspect lookup by node key
//! - Plain-text and JSON output

pub mod aom_view;
pub mod config;
pub mod decision;
pub mod inspector;
pub mod label_collapse;
pub mod presentation;
pub mod toggle;

pub use aom_view::{AomView, NodeRenderer, RendererRegistry};
pub use config::InspectorConfig;
pub use decision::{decide, DecisionInput, RenderDecision, Spacing, RULES};
pub use inspector::AomInspector;
pub use label_collapse::should_collapse_as_label;
pub use presentation::{CollapsedLabel, Content, FramedBlock};
pub use toggle::CollapseToggles;

/// DevTools error
#[derive(Debug, thiserror::Error)]
pub enum DevToolsError {
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("Node {0} is not a label")]
    NotCollapsible(String),

    #[error("Invalid inspector config: {0}")]
    Config(serde_json::Error),

    #[error(transparent)]
    A11y(#[from] fos_a11y::A11yError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
