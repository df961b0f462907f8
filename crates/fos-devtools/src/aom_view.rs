//! AOM View
//!
//! Recursive renderer for the AOM tree. Tags with a registered
//! `NodeRenderer` use it; every other element goes through the generic
//! renderer driven by `decision::decide`.

use std::collections::HashMap;

use fos_a11y::{AomNode, AomNodeId, AomNodeKind, AomTree, FocusManager};

use crate::config::InspectorConfig;
use crate::decision::{decide, DecisionInput, RenderDecision, Spacing};
use crate::presentation::{Content, FramedBlock};
use crate::toggle::CollapseToggles;

/// Dedicated renderer for one tag
pub trait NodeRenderer {
    fn render(&self, view: &AomView<'_>, node: &AomNode) -> Content;
}

/// Tag → dedicated renderer
#[derive(Default)]
pub struct RendererRegistry {
    renderers: HashMap<String, Box<dyn NodeRenderer>>,
}

impl RendererRegistry {
    pub fn new() -> Self { Self::default() }

    pub fn register(&mut self, tag: impl Into<String>, renderer: impl NodeRenderer + 'static) {
        self.renderers.insert(tag.into(), Box::new(renderer));
    }

    pub fn get(&self, tag: &str) -> Option<&dyn NodeRenderer> {
        self.renderers.get(tag).map(|r| &**r)
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

impl std::fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RendererRegistry")
            .field("tags", &self.renderers.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// One render pass over an immutable snapshot
pub struct AomView<'a> {
    pub tree: &'a AomTree,
    pub focus: &'a FocusManager,
    pub toggles: &'a CollapseToggles,
    pub config: &'a InspectorConfig,
    pub renderers: &'a RendererRegistry,
}

impl AomView<'_> {
    /// Render the whole tree
    pub fn render_root(&self) -> Content {
        match self.tree.root() {
            Some(root) => self.render(root),
            None => Content::Nothing,
        }
    }

    /// Render one node, dispatching on its tag
    pub fn render(&self, id: AomNodeId) -> Content {
        let Some(node) = self.tree.get(id) else {
            return Content::Nothing;
        };

        match &node.kind {
            AomNodeKind::Text(text) => Content::text(text.clone()),
            AomNodeKind::Element { tag } => match self.renderers.get(tag) {
                Some(renderer) => renderer.render(self, node),
                None => self.render_generic(node),
            },
        }
    }

    /// Render children in order. `Nothing` is dropped and adjacent text is
    /// merged; all-text children come back as a single `Text`.
    pub fn render_children(&self, id: AomNodeId) -> Content {
        let Some(node) = self.tree.get(id) else {
            return Content::text("");
        };

        let mut parts: Vec<Content> = Vec::with_capacity(node.children.len());
        for &child in &node.children {
            match self.render(child) {
                Content::Nothing => {}
                Content::Text(text) => match parts.last_mut() {
                    Some(Content::Text(prev)) => prev.push_str(&text),
                    _ => parts.push(Content::Text(text)),
                },
                other => parts.push(other),
            }
        }

        match parts.len() {
            0 => Content::text(""),
            1 if parts[0].as_text().is_some() => parts.remove(0),
            _ => Content::Fragment(parts),
        }
    }

    /// Generic rendering for nodes without a dedicated renderer
    pub fn render_generic(&self, node: &AomNode) -> Content {
        let content = self.render_children(node.id);
        let decision = decide(&DecisionInput {
            tree: self.tree,
            node,
            content: &content,
            focus: self.focus,
            config: self.config,
        });
        self.present(node, decision, content)
    }

    fn present(&self, node: &AomNode, decision: RenderDecision, content: Content) -> Content {
        match decision {
            RenderDecision::Suppressed => Content::Nothing,
            RenderDecision::Framed { header } => {
                let (anchor, style) = self.focus.anchor_and_style(node);
                Content::Framed(FramedBlock {
                    key: node.key.clone(),
                    role: format!("<{}>", node.tag()),
                    header,
                    anchor,
                    style,
                    color: self.config.frame_color.clone(),
                    content: Box::new(content),
                })
            }
            RenderDecision::CollapsedLabel => self.toggles.present(&node.key, content, self.config),
            RenderDecision::Paragraph => Content::Spaced(Box::new(content)),
            RenderDecision::Default(spacing) => wrap_contents(node, spacing, content),
        }
    }
}

fn wrap_contents(node: &AomNode, spacing: Spacing, content: Content) -> Content {
    let mut children = Vec::with_capacity(4);
    if spacing.separator {
        children.push(Content::Separator);
    }
    if spacing.leading_space {
        children.push(Content::text(" "));
    }
    children.push(content);
    if spacing.trailing_space {
        children.push(Content::text(" "));
    }

    Content::Contents {
        key: node.key.clone(),
        tag: node.tag().to_string(),
        children,
    }
}
