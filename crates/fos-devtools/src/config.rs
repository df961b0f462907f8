//! Inspector Configuration

use std::path::Path;

use fos_a11y::FocusIndicator;
use serde::Deserialize;

use crate::DevToolsError;

/// AOM inspector configuration options
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InspectorConfig {
    /// Top-level container tag, never framed
    pub root_tag: String,

    /// Tag rendered with vertical spacing
    pub paragraph_tag: String,

    /// Tag preceded by a vertical separator
    pub label_tag: String,

    /// Shown by a collapsed label
    pub collapsed_glyph: String,

    /// Shown by an expanded label with no content
    pub empty_placeholder: String,

    /// Frame color for focusable nodes
    pub frame_color: String,

    /// Focus ring color
    pub focus_color: String,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            root_tag: "body".to_string(),
            paragraph_tag: "p".to_string(),
            label_tag: "label".to_string(),
            collapsed_glyph: "…".to_string(),
            empty_placeholder: "(empty)".to_string(),
            frame_color: "#666".to_string(),
            focus_color: "#0066ff".to_string(),
        }
    }
}

impl InspectorConfig {
    /// Parse from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, DevToolsError> {
        serde_json::from_str(json).map_err(DevToolsError::Config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DevToolsError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    pub fn focus_indicator(&self) -> FocusIndicator {
        FocusIndicator {
            color: self.focus_color.clone(),
            ..FocusIndicator::default()
        }
    }
}
