//! Focus State
//!
//! Read-only focus information for renderers: which node holds focus, the
//! sequential focus order attribute, and the anchor/style pair a framed
//! node carries. Focus movement is left to the host.

use crate::aom::AomNode;

/// Focus manager
#[derive(Debug, Default)]
pub struct FocusManager {
    focused_key: Option<String>,
    indicator: FocusIndicator,
}

impl FocusManager {
    pub fn new() -> Self { Self::default() }

    pub fn with_indicator(indicator: FocusIndicator) -> Self {
        Self { focused_key: None, indicator }
    }

    /// Focus node by key
    pub fn focus(&mut self, key: impl Into<String>) {
        let key = key.into();
        tracing::debug!("Focus moved to {}", key);
        self.focused_key = Some(key);
    }

    /// Get focused key
    pub fn get_focused(&self) -> Option<&str> {
        self.focused_key.as_deref()
    }

    /// Blur current focus
    pub fn blur(&mut self) {
        self.focused_key = None;
    }

    pub fn is_focused(&self, node: &AomNode) -> bool {
        node.focused || self.focused_key.as_deref() == Some(node.key.as_str())
    }

    /// Anchor and style for a framed node
    pub fn anchor_and_style(&self, node: &AomNode) -> (FocusAnchor, FocusStyle) {
        let anchor = FocusAnchor::for_node(node);
        let style = if self.is_focused(node) {
            FocusStyle::Focused(self.indicator.clone())
        } else {
            FocusStyle::Unfocused
        };
        (anchor, style)
    }
}

/// Tab index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabIndex {
    NotFocusable,       // tabindex="-1" or not set
    Sequential(i32),    // tabindex="0" or positive
}

impl TabIndex {
    pub fn from_attribute(value: Option<i32>) -> Self {
        match value {
            Some(n) if n >= 0 => Self::Sequential(n),
            _ => Self::NotFocusable,
        }
    }

    pub fn is_focusable(&self) -> bool {
        matches!(self, Self::Sequential(_))
    }
}

/// Stable, addressable anchor for scroll-into-view and keyboard focus
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FocusAnchor(String);

impl FocusAnchor {
    pub fn for_node(node: &AomNode) -> Self {
        Self(format!("aom-{}", node.key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Focus indicator style
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FocusIndicator {
    pub color: String,
    pub width: f64,
    pub offset: f64,
}

impl Default for FocusIndicator {
    fn default() -> Self {
        Self {
            color: "#0066ff".to_string(),
            width: 2.0,
            offset: 2.0,
        }
    }
}

/// Presentation hint for a framed node
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum FocusStyle {
    Focused(FocusIndicator),
    #[default]
    Unfocused,
}

impl FocusStyle {
    pub fn is_focused(&self) -> bool {
        matches!(self, Self::Focused(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aom::AomTree;

    #[test]
    fn test_tab_index() {
        assert!(!TabIndex::from_attribute(Some(-1)).is_focusable());
        assert!(TabIndex::from_attribute(Some(0)).is_focusable());
        assert!(TabIndex::from_attribute(Some(5)).is_focusable());
        assert_eq!(TabIndex::from_attribute(None), TabIndex::NotFocusable);
        assert_eq!(TabIndex::from_attribute(Some(0)), TabIndex::Sequential(0));
    }

    #[test]
    fn test_anchor_and_style() {
        let mut tree = AomTree::new();
        let body = tree.create_root("1", "body");
        let button = tree.append_element(body, "2", "button");

        let mut fm = FocusManager::new();
        let (anchor, style) = fm.anchor_and_style(tree.get(button).unwrap());
        assert_eq!(anchor.as_str(), "aom-2");
        assert_eq!(style, FocusStyle::Unfocused);

        fm.focus("2");
        let (_, style) = fm.anchor_and_style(tree.get(button).unwrap());
        assert!(style.is_focused());

        fm.blur();
        assert_eq!(fm.get_focused(), None);
    }
}
