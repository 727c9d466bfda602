//! The immutable recursive structure a trained tree is made of.

use serde::{Serialize, Deserialize};

use std::collections::BTreeMap;

use crate::table::{Record, Table};

/// A node of a trained decision tree.
///
/// A leaf only carries the label it predicts. A branch carries the
/// attribute it splits on, one exclusively-owned child per attribute
/// value observed in the partition that produced it, and a majority
/// label used as the fallback when classification meets a value with
/// no matching child.
///
/// The children map is ordered by value, so traversal, `Debug` output,
/// and serialization are all deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// A terminal node predicting a single label.
    Leaf {
        /// The label predicted for every record reaching this node.
        label: String,
    },

    /// A node splitting on one attribute, with a child per observed value.
    Branch {
        /// The attribute this node tests.
        split_attribute: String,
        /// The majority label of the partition this node was grown from,
        /// predicted when a record's value matches no child.
        label: String,
        /// One child per attribute value observed during training.
        children: BTreeMap<String, Node>,
    },
}

impl Node {
    /// Construct a leaf predicting `label`.
    pub fn leaf<S: Into<String>>(label: S) -> Self {
        Self::Leaf { label: label.into(), }
    }

    /// Construct a branch splitting on `split_attribute` with fallback
    /// `label` and the given children.
    pub fn branch<S, T>(
        split_attribute: S,
        label: T,
        children: BTreeMap<String, Node>,
    ) -> Self
        where S: Into<String>,
              T: Into<String>,
    {
        Self::Branch {
            split_attribute: split_attribute.into(),
            label: label.into(),
            children,
        }
    }

    /// The label this node predicts when the traversal stops here:
    /// a leaf's label, or a branch's majority fallback.
    pub fn label(&self) -> &str {
        match self {
            Self::Leaf { label } => label,
            Self::Branch { label, .. } => label,
        }
    }

    /// Returns `true` if this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Total number of nodes in the subtree rooted here.
    pub fn node_count(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Branch { children, .. } => {
                1 + children.values()
                    .map(Node::node_count)
                    .sum::<usize>()
            },
        }
    }

    /// Number of edges on the longest path from this node to a leaf.
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf { .. } => 0,
            Self::Branch { children, .. } => {
                1 + children.values()
                    .map(Node::depth)
                    .max()
                    .unwrap_or(0)
            },
        }
    }

    /// Walk the tree with the values of `record`, falling back to the
    /// stored majority label on an unseen value or a missing attribute.
    pub(crate) fn classify(&self, record: &Record) -> &str {
        match self {
            Self::Leaf { label } => label,
            Self::Branch { split_attribute, label, children } => {
                let child = record.get(split_attribute)
                    .and_then(|value| children.get(value));
                match child {
                    Some(child) => child.classify(record),
                    None => label,
                }
            },
        }
    }

    /// Same traversal as [`Node::classify`], reading the values of row
    /// `row` straight out of `table`.
    pub(crate) fn classify_row(&self, table: &Table, row: usize) -> &str {
        match self {
            Self::Leaf { label } => label,
            Self::Branch { split_attribute, label, children } => {
                let child = table.attribute_index(split_attribute)
                    .map(|k| table.attributes()[k].at(row))
                    .and_then(|value| children.get(value));
                match child {
                    Some(child) => child.classify_row(table, row),
                    None => label,
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_way_tree() -> Node {
        let children = BTreeMap::from([
            ("x".to_string(), Node::leaf("yes")),
            ("y".to_string(), Node::leaf("no")),
        ]);
        Node::branch("a", "no", children)
    }

    #[test]
    fn classify_follows_matching_child() {
        let tree = two_way_tree();
        let record = Record::from_iter([("a", "x")]);
        assert_eq!(tree.classify(&record), "yes");
    }

    #[test]
    fn classify_falls_back_on_unseen_value() {
        let tree = two_way_tree();
        let record = Record::from_iter([("a", "z")]);
        assert_eq!(tree.classify(&record), "no");
    }

    #[test]
    fn classify_falls_back_on_missing_attribute() {
        let tree = two_way_tree();
        let record = Record::from_iter([("b", "x")]);
        assert_eq!(tree.classify(&record), "no");
    }

    #[test]
    fn structural_accessors() {
        let tree = two_way_tree();
        assert!(!tree.is_leaf());
        assert_eq!(tree.label(), "no");
        assert_eq!(tree.node_count(), 3);
        assert_eq!(tree.depth(), 1);
        assert_eq!(Node::leaf("yes").depth(), 0);
    }
}
