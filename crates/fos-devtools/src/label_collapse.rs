//! Label Collapsing
//!
//! A label nested inside its target, or sitting right next to it among the
//! content-bearing siblings, repeats what the target's accessible name
//! already says.

use fos_a11y::{AomNodeId, AomTree};

/// Whether `id` labels a node it is nested in or adjacent to
pub fn should_collapse_as_label(tree: &AomTree, id: AomNodeId) -> bool {
    let Some(node) = tree.get(id) else {
        return false;
    };
    let Some(siblings) = tree.content_siblings(id) else {
        return false;
    };
    if siblings.is_empty() {
        return false;
    }

    let index = siblings.iter().position(|&s| s == id);
    let previous = index.and_then(|i| i.checked_sub(1)).and_then(|i| siblings.get(i));
    let next = index.and_then(|i| siblings.get(i + 1));

    node.relations.label_of.iter().any(|&labelled| {
        tree.is_descendant_of(Some(id), Some(labelled))
            || previous == Some(&labelled)
            || next == Some(&labelled)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// body > [label "Name", input, span "x"]
    fn form() -> (AomTree, AomNodeId, AomNodeId, AomNodeId) {
        let mut tree = AomTree::new();
        let body = tree.create_root("1", "body");
        let label = tree.append_element(body, "2", "label");
        tree.append_text(label, "3", "Name");
        let input = tree.append_element(body, "4", "input");
        tree.append_text(input, "5", "value");
        let span = tree.append_element(body, "6", "span");
        tree.append_text(span, "7", "x");
        tree.derive_content_flags();
        (tree, label, input, span)
    }

    #[test]
    fn test_adjacent_following_target() {
        let (mut tree, label, input, _) = form();
        tree.add_label_relation(label, input);
        assert!(should_collapse_as_label(&tree, label));
    }

    #[test]
    fn test_adjacent_preceding_target() {
        let (mut tree, _, input, span) = form();
        tree.add_label_relation(span, input);
        assert!(should_collapse_as_label(&tree, span));
    }

    #[test]
    fn test_distant_target() {
        let (mut tree, label, _, span) = form();
        tree.add_label_relation(label, span);
        assert!(!should_collapse_as_label(&tree, label));
    }

    #[test]
    fn test_nested_in_target() {
        let mut tree = AomTree::new();
        let body = tree.create_root("1", "body");
        let button = tree.append_element(body, "2", "button");
        let label = tree.append_element(button, "3", "label");
        tree.append_text(label, "4", "Go");
        tree.derive_content_flags();
        tree.add_label_relation(label, button);

        assert!(should_collapse_as_label(&tree, label));
    }

    #[test]
    fn test_no_relation() {
        let (tree, label, _, _) = form();
        assert!(!should_collapse_as_label(&tree, label));
    }

    #[test]
    fn test_any_target_suffices() {
        let (mut tree, label, input, span) = form();
        tree.add_label_relation(label, span);
        tree.add_label_relation(label, input);
        assert!(should_collapse_as_label(&tree, label));
    }

    #[test]
    fn test_root_never_collapses() {
        let (mut tree, _, input, _) = form();
        tree.add_label_relation(AomNodeId::ROOT, input);
        assert!(!should_collapse_as_label(&tree, AomNodeId::ROOT));
    }

    #[test]
    fn test_blank_sibling_is_skipped() {
        let mut tree = AomTree::new();
        let body = tree.create_root("1", "body");
        let label = tree.append_element(body, "2", "label");
        tree.append_text(label, "3", "Name");
        tree.append_text(body, "4", "  \n ");
        let input = tree.append_element(body, "5", "input");
        tree.append_text(input, "6", "value");
        tree.derive_content_flags();
        tree.add_label_relation(label, input);

        assert!(should_collapse_as_label(&tree, label));
    }

    #[test]
    fn test_label_without_content_has_no_neighbours() {
        let mut tree = AomTree::new();
        let body = tree.create_root("1", "body");
        let input = tree.append_element(body, "2", "input");
        tree.append_text(input, "3", "value");
        let label = tree.append_element(body, "4", "label");
        tree.derive_content_flags();
        tree.add_label_relation(label, input);

        assert_eq!(tree.content_siblings(label), Some(vec![input]));
        assert!(!should_collapse_as_label(&tree, label));
    }

    #[test]
    fn test_label_without_content_nested_in_target() {
        let mut tree = AomTree::new();
        let body = tree.create_root("1", "body");
        let button = tree.append_element(body, "2", "button");
        tree.append_text(button, "3", "Go");
        let label = tree.append_element(button, "4", "label");
        tree.derive_content_flags();
        tree.add_label_relation(label, button);

        assert!(should_collapse_as_label(&tree, label));
    }
}
