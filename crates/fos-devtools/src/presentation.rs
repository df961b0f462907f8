//! Presentation Tree
//!
//! Output of the AOM view. Wrapper nodes keep the AOM key and tag so
//! click-to-inspect tooling can map rendered output back to the tree.

use fos_a11y::{FocusAnchor, FocusStyle};
use serde::Serialize;

/// Rendered content
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Content {
    /// Contributes no output at all
    Nothing,
    Text(String),
    Fragment(Vec<Content>),
    Framed(FramedBlock),
    Collapsed(CollapsedLabel),
    /// Block with vertical spacing before and after
    Spaced(Box<Content>),
    /// Transparent wrapper, no box of its own
    Contents {
        key: String,
        tag: String,
        children: Vec<Content>,
    },
    /// Vertical separator
    Separator,
}

/// Labeled frame around a focusable or focused node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FramedBlock {
    pub key: String,
    /// Role marker, e.g. `<button>`
    pub role: String,
    /// Explicitly authored accessible name
    pub header: Option<String>,
    pub anchor: FocusAnchor,
    pub style: FocusStyle,
    pub color: String,
    pub content: Box<Content>,
}

/// Label collapsed behind a toggle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollapsedLabel {
    pub key: String,
    pub collapsed: bool,
    /// Placeholder glyph while collapsed, content (or the empty
    /// placeholder) once expanded
    pub display: Box<Content>,
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Textual and whitespace-only
    pub fn is_blank_text(&self) -> bool {
        self.as_text().is_some_and(|t| t.trim().is_empty())
    }

    /// Renders as nothing visible
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Nothing => true,
            Self::Text(text) => text.is_empty(),
            Self::Fragment(children) => children.iter().all(Content::is_empty),
            _ => false,
        }
    }

    /// Key of the AOM node this content was rendered for
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Contents { key, .. } => Some(key),
            Self::Framed(block) => Some(&block.key),
            Self::Collapsed(label) => Some(&label.key),
            _ => None,
        }
    }

    fn children(&self) -> &[Content] {
        match self {
            Self::Fragment(children) | Self::Contents { children, .. } => children,
            Self::Framed(block) => std::slice::from_ref(&block.content),
            Self::Collapsed(label) => std::slice::from_ref(&label.display),
            Self::Spaced(content) => std::slice::from_ref(content),
            Self::Nothing | Self::Text(_) | Self::Separator => &[],
        }
    }

    /// Find the rendered output of an AOM node, depth first
    pub fn find_by_key(&self, key: &str) -> Option<&Content> {
        if self.key() == Some(key) {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find_by_key(key))
    }

    /// Plain-text rendering
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out
    }

    fn write_text(&self, out: &mut String) {
        match self {
            Self::Nothing => {}
            Self::Text(text) => out.push_str(text),
            Self::Fragment(children) | Self::Contents { children, .. } => {
                for child in children {
                    child.write_text(out);
                }
            }
            Self::Framed(block) => {
                break_line(out);
                out.push('[');
                out.push_str(&block.role);
                if let Some(header) = &block.header {
                    out.push(' ');
                    out.push_str(header);
                }
                out.push_str("] ");
                block.content.write_text(out);
                break_line(out);
            }
            Self::Collapsed(label) => {
                out.push('[');
                label.display.write_text(out);
                out.push(']');
            }
            Self::Spaced(content) => {
                blank_line(out);
                content.write_text(out);
                blank_line(out);
            }
            Self::Separator => break_line(out),
        }
    }
}

fn break_line(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

fn blank_line(out: &mut String) {
    if out.is_empty() {
        return;
    }
    break_line(out);
    if !out.ends_with("\n\n") {
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(key: &str, children: Vec<Content>) -> Content {
        Content::Contents { key: key.into(), tag: "div".into(), children }
    }

    #[test]
    fn test_blank_text() {
        assert!(Content::text(" \n\t").is_blank_text());
        assert!(Content::text("").is_blank_text());
        assert!(!Content::text(" a ").is_blank_text());
        assert!(!Content::Fragment(vec![]).is_blank_text());
    }

    #[test]
    fn test_find_by_key() {
        let tree = contents("1", vec![
            Content::text("a"),
            Content::Spaced(Box::new(contents("2", vec![Content::text("b")]))),
        ]);

        let found = tree.find_by_key("2").unwrap();
        assert_eq!(found.to_plain_text(), "b");
        assert!(tree.find_by_key("3").is_none());
    }

    #[test]
    fn test_plain_text_paragraphs() {
        let tree = Content::Fragment(vec![
            Content::text("intro"),
            Content::Spaced(Box::new(Content::text("one"))),
            Content::Spaced(Box::new(Content::text("two"))),
        ]);

        assert_eq!(tree.to_plain_text(), "intro\n\none\n\ntwo\n\n");
    }

    #[test]
    fn test_plain_text_collapsed() {
        let label = Content::Collapsed(CollapsedLabel {
            key: "4".into(),
            collapsed: true,
            display: Box::new(Content::text("…")),
        });
        assert_eq!(label.to_plain_text(), "[…]");
    }

    #[test]
    fn test_serialize_contents() {
        let json = serde_json::to_value(contents("7", vec![Content::text("x")])).unwrap();
        assert_eq!(json["kind"], "contents");
        assert_eq!(json["value"]["key"], "7");
        assert_eq!(json["value"]["tag"], "div");
    }
}
