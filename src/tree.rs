//
// tree.rs
// Dicom-Tree-rs
//
// Builds the labeled display tree from decoded elements: sequences expand into positional items, pixel data is dropped.
//
// Thales Matheus Mendonça Santos - October 2026

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::element::{ElementValue, TaggedElement};

/// One row of the rendered tree. The root is virtual and carries an empty label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub label: String,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn leaf(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn branch(label: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            label: label.into(),
            children,
        }
    }

    pub fn root(children: Vec<TreeNode>) -> Self {
        Self::branch(String::new(), children)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// First direct child whose label starts with `prefix`.
    pub fn find_child(&self, prefix: &str) -> Option<&TreeNode> {
        self.children.iter().find(|c| c.label.starts_with(prefix))
    }

    /// Number of nodes below this one, excluding itself.
    pub fn node_count(&self) -> usize {
        self.children.iter().map(|c| 1 + c.node_count()).sum()
    }

    /// Longest path from this node down to a leaf, counted in edges.
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.depth())
            .max()
            .unwrap_or(0)
    }
}

/// One nesting level before flattening. Keys keep their first insertion position.
type Level = IndexMap<String, Entry>;

#[derive(Debug)]
enum Entry {
    Text(String),
    Sequence(Vec<Level>),
}

/// Build the virtual root for a data set.
pub fn build(elements: &[TaggedElement]) -> TreeNode {
    let level = collect_level(elements);
    let root = TreeNode::root(flatten(level));
    debug!(
        top_level = root.children.len(),
        nodes = root.node_count(),
        depth = root.depth(),
        "tree built"
    );
    root
}

/// Serialize a tree to pretty JSON.
pub fn to_json(root: &TreeNode) -> serde_json::Result<String> {
    serde_json::to_string_pretty(root)
}

fn collect_level(elements: &[TaggedElement]) -> Level {
    let mut level = Level::new();
    for elem in elements {
        match &elem.value {
            ElementValue::Sequence(items) => {
                let items = items.iter().map(|item| collect_level(item)).collect();
                level.insert(elem.name.clone(), Entry::Sequence(items));
            }
            ElementValue::Scalar(_) if elem.is_pixel_payload() => {}
            ElementValue::Scalar(text) => {
                // Duplicate names overwrite in place: last write wins.
                level.insert(elem.name.clone(), Entry::Text(text.clone()));
            }
        }
    }
    level
}

fn flatten(level: Level) -> Vec<TreeNode> {
    level
        .into_iter()
        .map(|(key, entry)| match entry {
            Entry::Text(text) => TreeNode::leaf(format!("{key}:{text}")),
            Entry::Sequence(items) => {
                let label = format!("{key}:[sequence: {} item(s)]", items.len());
                let children = items
                    .into_iter()
                    .enumerate()
                    .map(|(idx, item)| TreeNode::branch(format!("item {idx}"), flatten(item)))
                    .collect();
                TreeNode::branch(label, children)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom::core::{Tag, VR};

    fn scalar(name: &str, text: &str) -> TaggedElement {
        TaggedElement::scalar(Tag(0x0009, 0x0010), name, VR::LO, text)
    }

    fn sequence(name: &str, items: Vec<Vec<TaggedElement>>) -> TaggedElement {
        TaggedElement::sequence(Tag(0x0009, 0x0020), name, items)
    }

    fn labels(node: &TreeNode) -> Vec<&str> {
        node.children.iter().map(|c| c.label.as_str()).collect()
    }

    fn contains_label_prefix(node: &TreeNode, prefix: &str) -> bool {
        node.label.starts_with(prefix) || node.children.iter().any(|c| contains_label_prefix(c, prefix))
    }

    #[test]
    fn scalar_element_becomes_leaf() {
        let root = build(&[scalar("PatientName", "DOE^JOHN")]);
        assert_eq!(root.label, "");
        assert_eq!(root.children, vec![TreeNode::leaf("PatientName:DOE^JOHN")]);
    }

    #[test]
    fn sequence_items_are_numbered_in_order() {
        let root = build(&[sequence("Seq", vec![vec![], vec![]])]);
        assert_eq!(root.children.len(), 1);

        let seq = &root.children[0];
        assert!(seq.label.starts_with("Seq:"));
        assert_eq!(seq.label, "Seq:[sequence: 2 item(s)]");
        assert_eq!(labels(seq), vec!["item 0", "item 1"]);
        assert!(seq.children.iter().all(TreeNode::is_leaf));
    }

    #[test]
    fn empty_sequence_still_produces_a_node() {
        let root = build(&[sequence("Empty", vec![])]);
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].label, "Empty:[sequence: 0 item(s)]");
        assert!(root.children[0].is_leaf());
    }

    #[test]
    fn pixel_data_is_dropped() {
        let pixels = TaggedElement::scalar(Tag(0x7fe0, 0x0010), "PixelData", VR::OB, "0\\64\\128\\255");
        let root = build(&[pixels]);
        assert!(root.children.is_empty());
    }

    #[test]
    fn pixel_data_is_dropped_inside_items_and_when_repeated() {
        let pixels = || TaggedElement::scalar(Tag(0x7fe0, 0x0010), "PixelData", VR::OW, "1\\2");
        let root = build(&[
            pixels(),
            sequence(
                "IconImageSequence",
                vec![vec![scalar("Rows", "64"), pixels()], vec![pixels()]],
            ),
            pixels(),
        ]);

        assert!(!contains_label_prefix(&root, "PixelData"));
        let seq = &root.children[0];
        assert_eq!(labels(&seq.children[0]), vec!["Rows:64"]);
        assert!(seq.children[1].is_leaf());
    }

    #[test]
    fn duplicate_names_keep_only_the_last_value() {
        let root = build(&[scalar("X", "1"), scalar("X", "2")]);
        assert_eq!(labels(&root), vec!["X:2"]);
    }

    #[test]
    fn duplicate_name_keeps_first_position() {
        let root = build(&[scalar("A", "1"), scalar("B", "2"), scalar("A", "3")]);
        assert_eq!(labels(&root), vec!["A:3", "B:2"]);
    }

    #[test]
    fn sequence_can_overwrite_scalar_with_same_name() {
        let root = build(&[scalar("X", "1"), sequence("X", vec![vec![]])]);
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].label, "X:[sequence: 1 item(s)]");
        assert_eq!(labels(&root.children[0]), vec!["item 0"]);
    }

    #[test]
    fn interleaved_scalars_and_sequences_keep_source_order() {
        let root = build(&[
            scalar("A", "a"),
            sequence("S1", vec![vec![scalar("Inner", "i")]]),
            scalar("B", "b"),
            sequence("S2", vec![]),
            scalar("C", "c"),
        ]);
        assert_eq!(
            labels(&root),
            vec![
                "A:a",
                "S1:[sequence: 1 item(s)]",
                "B:b",
                "S2:[sequence: 0 item(s)]",
                "C:c"
            ]
        );
        assert_eq!(labels(&root.children[1].children[0]), vec!["Inner:i"]);
    }

    #[test]
    fn nested_sequences_recurse() {
        let inner = sequence("Inner", vec![vec![scalar("Leaf", "x")]]);
        let root = build(&[sequence("Outer", vec![vec![inner]])]);

        let leaf = root
            .find_child("Outer:")
            .and_then(|n| n.find_child("item 0"))
            .and_then(|n| n.find_child("Inner:"))
            .and_then(|n| n.find_child("item 0"))
            .and_then(|n| n.find_child("Leaf:"))
            .expect("nested leaf");
        assert_eq!(leaf.label, "Leaf:x");
        assert_eq!(root.depth(), 5);
        assert_eq!(root.node_count(), 5);
    }

    #[test]
    fn build_is_deterministic() {
        let input = vec![
            scalar("A", "1"),
            sequence("S", vec![vec![scalar("B", "2")], vec![]]),
            scalar("A", "3"),
        ];
        assert_eq!(build(&input), build(&input));
    }

    #[test]
    fn large_values_are_not_truncated() {
        let long = "x".repeat(10_000);
        let root = build(&[scalar("Comments", &long)]);
        assert_eq!(root.children[0].label.len(), "Comments:".len() + 10_000);
    }

    #[test]
    fn json_keeps_labels_and_children() {
        let root = build(&[sequence("S", vec![vec![scalar("A", "1")]])]);
        let json = to_json(&root).expect("json");
        let restored: TreeNode = serde_json::from_str(&json).expect("parse");
        assert_eq!(restored, root);
        assert!(json.contains("\"item 0\""));
    }
}
