//! Collapse Toggles
//!
//! Expanded/collapsed state of collapsed labels, kept outside the AOM
//! snapshot and keyed by node key. Labels start collapsed.

use std::collections::HashSet;

use fos_a11y::AomTree;

use crate::config::InspectorConfig;
use crate::presentation::{CollapsedLabel, Content};

/// Per-label toggle state
#[derive(Debug, Clone, Default)]
pub struct CollapseToggles {
    expanded: HashSet<String>,
}

impl CollapseToggles {
    pub fn new() -> Self { Self::default() }

    pub fn is_collapsed(&self, key: &str) -> bool {
        !self.expanded.contains(key)
    }

    /// Flip state, returns whether the label is now collapsed
    pub fn toggle(&mut self, key: &str) -> bool {
        let collapsed = if self.expanded.remove(key) {
            true
        } else {
            self.expanded.insert(key.to_string());
            false
        };
        tracing::trace!("Label {} {}", key, if collapsed { "collapsed" } else { "expanded" });
        collapsed
    }

    pub fn expand(&mut self, key: &str) {
        self.expanded.insert(key.to_string());
    }

    /// Drop state of nodes missing from `tree`
    pub fn retain_in(&mut self, tree: &AomTree) {
        let before = self.expanded.len();
        self.expanded.retain(|key| tree.find_by_key(key).is_some());
        let dropped = before - self.expanded.len();
        if dropped > 0 {
            tracing::debug!("Dropped {} stale toggle states", dropped);
        }
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }

    /// Present `content` behind this label's toggle
    pub fn present(&self, key: &str, content: Content, config: &InspectorConfig) -> Content {
        let collapsed = self.is_collapsed(key);
        let display = if collapsed {
            Content::text(config.collapsed_glyph.clone())
        } else if content.is_empty() {
            Content::text(config.empty_placeholder.clone())
        } else {
            content
        };

        Content::Collapsed(CollapsedLabel {
            key: key.to_string(),
            collapsed,
            display: Box::new(display),
        })
    }
}
