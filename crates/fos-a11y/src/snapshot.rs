//! AOM Snapshots
//!
//! JSON form of an AOM tree as produced by the model layer. Label relations
//! refer to node keys and are resolved once the whole tree is built.

use std::collections::HashMap;

use serde::Deserialize;

use crate::aom::{AomNodeId, AomTree};
use crate::A11yError;

/// Snapshot document
#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot {
    pub root: SnapshotNode,
}

/// Snapshot node: either a text leaf or an element
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SnapshotNode {
    Text(SnapshotText),
    Element(SnapshotElement),
}

/// Text leaf. Any other field makes the object an element.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnapshotText {
    #[serde(default)]
    pub key: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotElement {
    #[serde(default)]
    pub key: Option<String>,
    pub tag: String,
    #[serde(default)]
    pub inline: bool,
    #[serde(default)]
    pub focused: bool,
    #[serde(default)]
    pub tabindex: Option<i32>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub custom_name: bool,
    /// Overrides the derived content flag
    #[serde(default)]
    pub has_content: Option<bool>,
    #[serde(default)]
    pub label_of: Vec<String>,
    #[serde(default)]
    pub children: Vec<SnapshotNode>,
}

impl Snapshot {
    /// Parse snapshot JSON
    pub fn from_json(json: &str) -> Result<Self, A11yError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the arena tree
    pub fn build(&self) -> Result<AomTree, A11yError> {
        let SnapshotNode::Element(root) = &self.root else {
            return Err(A11yError::TextRoot);
        };

        let mut builder = Builder::default();
        let root_key = root.key.clone().unwrap_or_else(|| "root".to_string());
        let root_id = builder.tree.create_root(root_key.clone(), root.tag.clone());
        builder.register(root_key, root_id)?;
        builder.fill_element(root_id, root);
        builder.children(root_id, &root.children)?;
        builder.finish()
    }
}

/// Parse and build in one step
pub fn load(json: &str) -> Result<AomTree, A11yError> {
    Snapshot::from_json(json)?.build()
}

#[derive(Default)]
struct Builder {
    tree: AomTree,
    keys: HashMap<String, AomNodeId>,
    content_overrides: HashMap<AomNodeId, bool>,
    pending_labels: Vec<(AomNodeId, Vec<String>)>,
}

impl Builder {
    fn register(&mut self, key: String, id: AomNodeId) -> Result<(), A11yError> {
        if self.keys.insert(key.clone(), id).is_some() {
            return Err(A11yError::DuplicateKey(key));
        }
        Ok(())
    }

    fn fill_element(&mut self, id: AomNodeId, element: &SnapshotElement) {
        if let Some(node) = self.tree.get_mut(id) {
            node.is_inline = element.inline;
            node.focused = element.focused;
            node.tabindex = element.tabindex;
            node.accessible_name = element.name.clone();
            node.has_custom_accessible_name = element.custom_name;
        }
        if let Some(has_content) = element.has_content {
            self.content_overrides.insert(id, has_content);
        }
        if !element.label_of.is_empty() {
            self.pending_labels.push((id, element.label_of.clone()));
        }
    }

    fn children(&mut self, parent: AomNodeId, children: &[SnapshotNode]) -> Result<(), A11yError> {
        let parent_key = self
            .tree
            .get(parent)
            .map(|n| n.key.clone())
            .unwrap_or_default();

        for (index, child) in children.iter().enumerate() {
            let derived_key = || format!("{}.{}", parent_key, index);
            match child {
                SnapshotNode::Text(text) => {
                    let key = text.key.clone().unwrap_or_else(derived_key);
                    let id = self.tree.append_text(parent, key.clone(), text.text.clone());
                    self.register(key, id)?;
                }
                SnapshotNode::Element(element) => {
                    let key = element.key.clone().unwrap_or_else(derived_key);
                    let id = self.tree.append_element(parent, key.clone(), element.tag.clone());
                    self.register(key, id)?;
                    self.fill_element(id, element);
                    self.children(id, &element.children)?;
                }
            }
        }
        Ok(())
    }

    fn finish(mut self) -> Result<AomTree, A11yError> {
        self.derive_content();

        for (label, targets) in std::mem::take(&mut self.pending_labels) {
            let label_key = self
                .tree
                .get(label)
                .map(|n| n.key.clone())
                .unwrap_or_default();

            for target_key in targets {
                let target = *self.keys.get(&target_key).ok_or_else(|| {
                    A11yError::UnknownLabelTarget {
                        label: label_key.clone(),
                        target: target_key.clone(),
                    }
                })?;
                if target == label {
                    return Err(A11yError::SelfLabel(label_key));
                }
                self.tree.add_label_relation(label, target);
            }
        }

        tracing::debug!("Loaded AOM snapshot: {} nodes", self.tree.len());
        Ok(self.tree)
    }

    fn derive_content(&mut self) {
        self.tree.derive_content_flags();
        if self.content_overrides.is_empty() {
            return;
        }

        // Overrides can change ancestors, so redo the pass with them pinned.
        let ids: Vec<AomNodeId> = self.tree.iter().map(|n| n.id).rev().collect();
        for id in ids {
            let has_content = match self.content_overrides.get(&id) {
                Some(&forced) => forced,
                None => {
                    let Some(node) = self.tree.get(id) else { continue };
                    if node.is_text() {
                        continue;
                    }
                    node.children
                        .iter()
                        .any(|&c| self.tree.get(c).is_some_and(|c| c.has_content))
                }
            };
            if let Some(node) = self.tree.get_mut(id) {
                node.has_content = has_content;
            }
        }
    }
}
