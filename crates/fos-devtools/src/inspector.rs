//! AOM Inspector
//!
//! Holds the current AOM snapshot together with the state that lives
//! outside it (focus, label toggles, selection) and renders the view.

use std::path::Path;

use fos_a11y::{snapshot, AomNode, AomTree, FocusManager};

use crate::aom_view::{AomView, NodeRenderer, RendererRegistry};
use crate::config::InspectorConfig;
use crate::presentation::Content;
use crate::toggle::CollapseToggles;
use crate::DevToolsError;

/// AOM inspector
#[derive(Debug, Default)]
pub struct AomInspector {
    tree: AomTree,
    focus: FocusManager,
    toggles: CollapseToggles,
    config: InspectorConfig,
    renderers: RendererRegistry,
    selected: Option<String>,
}

impl AomInspector {
    pub fn new() -> Self { Self::default() }

    pub fn with_config(config: InspectorConfig) -> Self {
        Self {
            focus: FocusManager::with_indicator(config.focus_indicator()),
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    pub fn tree(&self) -> &AomTree {
        &self.tree
    }

    /// Register a dedicated renderer for `tag`
    pub fn register_renderer(
        &mut self,
        tag: impl Into<String>,
        renderer: impl NodeRenderer + 'static,
    ) {
        self.renderers.register(tag, renderer);
    }

    /// Replace the snapshot. State of nodes that disappeared is dropped.
    pub fn load_snapshot(&mut self, tree: AomTree) {
        self.tree = tree;
        self.toggles.retain_in(&self.tree);

        if let Some(key) = self.focus.get_focused() {
            if self.tree.find_by_key(key).is_none() {
                self.focus.blur();
            }
        }
        if let Some(key) = &self.selected {
            if self.tree.find_by_key(key).is_none() {
                self.selected = None;
            }
        }

        tracing::debug!(
            "Inspector loaded snapshot with {} nodes, {} labels expanded",
            self.tree.len(),
            self.toggles.expanded_count()
        );
    }

    /// Parse and load a JSON snapshot
    pub fn load_json(&mut self, json: &str) -> Result<(), DevToolsError> {
        let tree = snapshot::load(json)?;
        self.load_snapshot(tree);
        Ok(())
    }

    /// Load a JSON snapshot from disk
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), DevToolsError> {
        let json = std::fs::read_to_string(path)?;
        self.load_json(&json)
    }

    fn node(&self, key: &str) -> Result<&AomNode, DevToolsError> {
        self.tree
            .find_by_key(key)
            .ok_or_else(|| DevToolsError::UnknownNode(key.to_string()))
    }

    /// Focus node
    pub fn focus(&mut self, key: &str) -> Result<(), DevToolsError> {
        self.node(key)?;
        self.focus.focus(key);
        Ok(())
    }

    pub fn blur(&mut self) {
        self.focus.blur();
    }

    /// Flip a label toggle, returns whether it is now collapsed
    pub fn toggle(&mut self, key: &str) -> Result<bool, DevToolsError> {
        if self.node(key)?.relations.label_of.is_empty() {
            return Err(DevToolsError::NotCollapsible(key.to_string()));
        }
        Ok(self.toggles.toggle(key))
    }

    /// Expand a collapsed label, no-op if already expanded
    pub fn expand(&mut self, key: &str) -> Result<(), DevToolsError> {
        if self.node(key)?.relations.label_of.is_empty() {
            return Err(DevToolsError::NotCollapsible(key.to_string()));
        }
        self.toggles.expand(key);
        Ok(())
    }

    pub fn is_collapsed(&self, key: &str) -> bool {
        self.toggles.is_collapsed(key)
    }

    /// Select node
    pub fn select(&mut self, key: &str) -> Result<(), DevToolsError> {
        self.node(key)?;
        self.selected = Some(key.to_string());
        Ok(())
    }

    /// Get selected node
    pub fn get_selected(&self) -> Option<&AomNode> {
        self.selected.as_deref().and_then(|key| self.tree.find_by_key(key))
    }

    fn view(&self) -> AomView<'_> {
        AomView {
            tree: &self.tree,
            focus: &self.focus,
            toggles: &self.toggles,
            config: &self.config,
            renderers: &self.renderers,
        }
    }

    /// Render the whole snapshot
    pub fn render(&self) -> Content {
        self.view().render_root()
    }

    /// Rendered output of one node, as found in the full render
    pub fn inspect(&self, key: &str) -> Result<Option<Content>, DevToolsError> {
        self.node(key)?;
        Ok(self.render().find_by_key(key).cloned())
    }

    /// Get AOM tree as string
    pub fn get_aom_tree(&self, depth: usize) -> String {
        let mut result = String::new();
        if let Some(root) = self.tree.root().and_then(|id| self.tree.get(id)) {
            self.build_tree_string(&mut result, root, depth);
        }
        result
    }

    fn build_tree_string(&self, result: &mut String, node: &AomNode, max_depth: usize) {
        let indent = self.tree.get_depth(node.id);
        if indent > max_depth {
            return;
        }

        let prefix = "  ".repeat(indent);
        match node.as_text() {
            Some(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return;
                }
                let short: String = trimmed.chars().take(50).collect();
                let ellipsis = if trimmed.chars().count() > 50 { "..." } else { "" };
                result.push_str(&format!("{}\"{}{}\"\n", prefix, short, ellipsis));
            }
            None => {
                result.push_str(&format!("{}<{}> #{}", prefix, node.tag(), node.key));
                if !node.relations.label_of.is_empty() {
                    let targets: Vec<&str> = node.relations.label_of
                        .iter()
                        .filter_map(|&id| self.tree.get(id))
                        .map(|n| n.key.as_str())
                        .collect();
                    result.push_str(&format!(" label-of={}", targets.join(",")));
                }
                result.push('\n');
                for &child in &node.children {
                    if let Some(child) = self.tree.get(child) {
                        self.build_tree_string(result, child, max_depth);
                    }
                }
            }
        }
    }
}
