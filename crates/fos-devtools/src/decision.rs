//! Render Decisions
//!
//! Chooses how a node without a dedicated renderer is presented. Rules are
//! tried in order and the first one that applies wins.

use fos_a11y::{AomNode, AomTree, FocusManager};

use crate::config::InspectorConfig;
use crate::label_collapse::should_collapse_as_label;
use crate::presentation::Content;

/// Presentation shape of a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderDecision {
    /// No output at all
    Suppressed,
    /// Frame with role marker and optional authored-name header
    Framed { header: Option<String> },
    /// Redundant label behind a toggle
    CollapsedLabel,
    /// Vertically spaced block
    Paragraph,
    /// Transparent wrapper
    Default(Spacing),
}

/// Spacing around default-wrapped content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Spacing {
    pub separator: bool,
    pub leading_space: bool,
    pub trailing_space: bool,
}

impl Spacing {
    pub fn new(is_label: bool, is_inline: bool, is_first: bool, is_last: bool) -> Self {
        Self {
            separator: is_label,
            leading_space: !is_inline && !is_first,
            trailing_space: !is_inline && !is_last,
        }
    }
}

/// Everything a rule may look at
pub struct DecisionInput<'a> {
    pub tree: &'a AomTree,
    pub node: &'a AomNode,
    pub content: &'a Content,
    pub focus: &'a FocusManager,
    pub config: &'a InspectorConfig,
}

pub type Rule = fn(&DecisionInput<'_>) -> Option<RenderDecision>;

/// Rules in precedence order
pub const RULES: [(&str, Rule); 5] = [
    ("suppress-empty", suppress_empty),
    ("frame-focusable", frame_focusable),
    ("collapse-label", collapse_label),
    ("paragraph", paragraph),
    ("default", default_wrapping),
];

/// Decide the presentation of `input.node`
pub fn decide(input: &DecisionInput<'_>) -> RenderDecision {
    for (name, rule) in RULES {
        if let Some(decision) = rule(input) {
            tracing::trace!("Node {} <{}>: {}", input.node.key, input.node.tag(), name);
            return decision;
        }
    }
    // The default rule always applies.
    RenderDecision::Default(Spacing::default())
}

fn suppress_empty(input: &DecisionInput<'_>) -> Option<RenderDecision> {
    input.content.is_blank_text().then_some(RenderDecision::Suppressed)
}

fn frame_focusable(input: &DecisionInput<'_>) -> Option<RenderDecision> {
    let node = input.node;
    if node.tag() == input.config.root_tag {
        return None;
    }
    if !input.focus.is_focused(node) && !node.tab_index().is_focusable() {
        return None;
    }
    Some(RenderDecision::Framed {
        header: node.custom_accessible_name().map(str::to_string),
    })
}

fn collapse_label(input: &DecisionInput<'_>) -> Option<RenderDecision> {
    should_collapse_as_label(input.tree, input.node.id).then_some(RenderDecision::CollapsedLabel)
}

fn paragraph(input: &DecisionInput<'_>) -> Option<RenderDecision> {
    (input.node.tag() == input.config.paragraph_tag).then_some(RenderDecision::Paragraph)
}

fn default_wrapping(input: &DecisionInput<'_>) -> Option<RenderDecision> {
    let node = input.node;
    Some(RenderDecision::Default(Spacing::new(
        node.tag() == input.config.label_tag,
        node.is_inline,
        input.tree.is_first_child(node.id),
        input.tree.is_last_child(node.id),
    )))
}
