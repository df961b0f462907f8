//! Accessible Object Model
//!
//! Arena-based AOM tree. Parent links and label relations are stored as
//! `AomNodeId` indices into the arena, never as owning references.

use crate::focus::TabIndex;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AomNodeId(pub(crate) u32);

impl AomNodeId {
    /// Root node ID
    pub const ROOT: AomNodeId = AomNodeId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Node kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AomNodeKind {
    Element { tag: String },
    Text(String),
}

/// Named semantic relations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relations {
    /// Nodes this node is the textual label of
    pub label_of: Vec<AomNodeId>,
}

/// AOM node
#[derive(Debug, Clone)]
pub struct AomNode {
    pub id: AomNodeId,
    /// Stable key, unique within the tree
    pub key: String,
    pub kind: AomNodeKind,
    pub parent: Option<AomNodeId>,
    pub children: Vec<AomNodeId>,
    pub has_content: bool,
    /// Supplied by the model layer; no tag-based derivation here
    pub is_inline: bool,
    pub focused: bool,
    /// Raw `tabindex` attribute
    pub tabindex: Option<i32>,
    pub accessible_name: String,
    pub has_custom_accessible_name: bool,
    pub relations: Relations,
}

impl AomNode {
    fn new(id: AomNodeId, key: String, kind: AomNodeKind) -> Self {
        Self {
            id,
            key,
            kind,
            parent: None,
            children: Vec::new(),
            has_content: false,
            is_inline: false,
            focused: false,
            tabindex: None,
            accessible_name: String::new(),
            has_custom_accessible_name: false,
            relations: Relations::default(),
        }
    }

    /// Tag name, empty for text nodes
    pub fn tag(&self) -> &str {
        match &self.kind {
            AomNodeKind::Element { tag } => tag,
            AomNodeKind::Text(_) => "",
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, AomNodeKind::Text(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.kind {
            AomNodeKind::Text(text) => Some(text),
            AomNodeKind::Element { .. } => None,
        }
    }

    pub fn tab_index(&self) -> TabIndex {
        TabIndex::from_attribute(self.tabindex)
    }

    /// Header text: only an explicitly authored name is shown
    pub fn custom_accessible_name(&self) -> Option<&str> {
        self.has_custom_accessible_name
            .then_some(self.accessible_name.as_str())
    }
}

/// AOM tree
#[derive(Debug, Default)]
pub struct AomTree {
    nodes: Vec<AomNode>,
}

impl AomTree {
    pub fn new() -> Self { Self::default() }

    /// Create root element. Must be the first node created.
    pub fn create_root(&mut self, key: impl Into<String>, tag: impl Into<String>) -> AomNodeId {
        debug_assert!(self.nodes.is_empty(), "root must be created first");
        self.push(key.into(), AomNodeKind::Element { tag: tag.into() }, None)
    }

    /// Append element as the last child of `parent`
    pub fn append_element(
        &mut self,
        parent: AomNodeId,
        key: impl Into<String>,
        tag: impl Into<String>,
    ) -> AomNodeId {
        self.push(key.into(), AomNodeKind::Element { tag: tag.into() }, Some(parent))
    }

    /// Append text leaf; content flag follows the text
    pub fn append_text(
        &mut self,
        parent: AomNodeId,
        key: impl Into<String>,
        text: impl Into<String>,
    ) -> AomNodeId {
        let text = text.into();
        let has_content = !text.trim().is_empty();
        let id = self.push(key.into(), AomNodeKind::Text(text), Some(parent));
        self.nodes[id.index()].has_content = has_content;
        self.nodes[id.index()].is_inline = true;
        id
    }

    fn push(&mut self, key: String, kind: AomNodeKind, parent: Option<AomNodeId>) -> AomNodeId {
        let id = AomNodeId(self.nodes.len() as u32);
        let mut node = AomNode::new(id, key, kind);
        node.parent = parent;

        if let Some(pid) = parent {
            if let Some(parent) = self.get_mut(pid) {
                parent.children.push(id);
            }
        }

        self.nodes.push(node);
        id
    }

    /// Record that `label` labels `target`. Self-relations are ignored.
    pub fn add_label_relation(&mut self, label: AomNodeId, target: AomNodeId) {
        if label == target || self.get(target).is_none() {
            return;
        }
        if let Some(node) = self.get_mut(label) {
            if !node.relations.label_of.contains(&target) {
                node.relations.label_of.push(target);
            }
        }
    }

    pub fn root(&self) -> Option<AomNodeId> {
        (!self.nodes.is_empty()).then_some(AomNodeId::ROOT)
    }

    pub fn get(&self, id: AomNodeId) -> Option<&AomNode> {
        self.nodes.get(id.index())
    }

    pub fn get_mut(&mut self, id: AomNodeId) -> Option<&mut AomNode> {
        self.nodes.get_mut(id.index())
    }

    pub fn find_by_key(&self, key: &str) -> Option<&AomNode> {
        self.nodes.iter().find(|n| n.key == key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AomNode> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Children with renderable content, in document order
    pub fn content_children(&self, id: AomNodeId) -> Vec<AomNodeId> {
        self.get(id)
            .map(|node| {
                node.children
                    .iter()
                    .copied()
                    .filter(|&child| self.get(child).is_some_and(|c| c.has_content))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Content-bearing siblings of `id`, including `id` itself if it has content
    pub fn content_siblings(&self, id: AomNodeId) -> Option<Vec<AomNodeId>> {
        let parent = self.get(id)?.parent?;
        Some(self.content_children(parent))
    }

    /// First among content-bearing siblings. A root counts as first.
    pub fn is_first_child(&self, id: AomNodeId) -> bool {
        match self.content_siblings(id) {
            Some(siblings) => siblings.first() == Some(&id),
            None => true,
        }
    }

    /// Last among content-bearing siblings. A root counts as last.
    pub fn is_last_child(&self, id: AomNodeId) -> bool {
        match self.content_siblings(id) {
            Some(siblings) => siblings.last() == Some(&id),
            None => true,
        }
    }

    /// Whether `ancestor` is on the parent chain of `descendant`, excluding
    /// `descendant` itself. Missing references never relate.
    pub fn is_descendant_of(
        &self,
        descendant: Option<AomNodeId>,
        ancestor: Option<AomNodeId>,
    ) -> bool {
        let (Some(descendant), Some(ancestor)) = (descendant, ancestor) else {
            return false;
        };

        let mut current = self.get(descendant).and_then(|n| n.parent);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.get(id).and_then(|n| n.parent);
        }

        false
    }

    /// Get tree depth
    pub fn get_depth(&self, id: AomNodeId) -> usize {
        let mut depth = 0;
        let mut current = self.get(id).and_then(|n| n.parent);

        while let Some(parent) = current {
            depth += 1;
            current = self.get(parent).and_then(|n| n.parent);
        }

        depth
    }

    /// Derive `has_content` bottom-up for elements: an element has content
    /// when any child has content. Text nodes keep their own flag.
    pub fn derive_content_flags(&mut self) {
        // Children always have a higher index than their parent.
        for index in (0..self.nodes.len()).rev() {
            if self.nodes[index].is_text() {
                continue;
            }
            let has_content = self.nodes[index]
                .children
                .iter()
                .any(|c| self.nodes.get(c.index()).is_some_and(|n| n.has_content));
            self.nodes[index].has_content = has_content;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (AomTree, AomNodeId, AomNodeId, AomNodeId, AomNodeId) {
        let mut tree = AomTree::new();
        let body = tree.create_root("1", "body");
        let div = tree.append_element(body, "2", "div");
        let blank = tree.append_text(div, "3", "   ");
        let span = tree.append_element(div, "4", "span");
        tree.append_text(span, "5", "hi");
        let em = tree.append_element(div, "6", "em");
        tree.append_text(em, "7", "there");
        tree.derive_content_flags();
        let _ = blank;
        (tree, body, div, span, em)
    }

    #[test]
    fn test_is_descendant_of() {
        let (tree, body, div, span, _) = sample();

        assert!(tree.is_descendant_of(Some(span), Some(body)));
        assert!(tree.is_descendant_of(Some(span), Some(div)));
        assert!(!tree.is_descendant_of(Some(div), Some(span)));
        assert!(!tree.is_descendant_of(Some(span), Some(span)));
    }

    #[test]
    fn test_is_descendant_of_missing() {
        let (tree, body, _, span, _) = sample();

        assert!(!tree.is_descendant_of(None, Some(body)));
        assert!(!tree.is_descendant_of(Some(span), None));
        assert!(!tree.is_descendant_of(Some(AomNodeId(999)), Some(body)));
    }

    #[test]
    fn test_content_children_skip_blank() {
        let (tree, _, div, span, em) = sample();

        assert_eq!(tree.content_children(div), vec![span, em]);
        assert!(tree.is_first_child(span));
        assert!(!tree.is_last_child(span));
        assert!(tree.is_last_child(em));
        assert!(!tree.is_first_child(em));
    }

    #[test]
    fn test_derive_content_flags() {
        let mut tree = AomTree::new();
        let body = tree.create_root("1", "body");
        let empty = tree.append_element(body, "2", "div");
        tree.append_text(empty, "3", "\n  ");
        tree.derive_content_flags();

        assert!(!tree.get(empty).unwrap().has_content);
        assert!(!tree.get(body).unwrap().has_content);
    }

    #[test]
    fn test_label_relation_ignores_self() {
        let (mut tree, _, div, span, _) = sample();
        tree.add_label_relation(span, span);
        tree.add_label_relation(span, div);
        tree.add_label_relation(span, div);

        assert_eq!(tree.get(span).unwrap().relations.label_of, vec![div]);
    }

    #[test]
    fn test_iter_from_leaves_up() {
        let (tree, body, div, _, _) = sample();
        let ids: Vec<AomNodeId> = tree.iter().rev().map(|n| n.id).collect();

        assert_eq!(ids.len(), tree.len());
        assert_eq!(ids.last(), Some(&body));
        assert!(ids.iter().position(|&id| id == div) < ids.iter().position(|&id| id == body));
    }

    #[test]
    fn test_depth() {
        let (tree, body, _, span, _) = sample();
        assert_eq!(tree.get_depth(body), 0);
        assert_eq!(tree.get_depth(span), 2);
    }
}
