//! The trained decision tree classifier.

use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::table::{Record, Table};
use super::node::Node;

/// A trained decision tree.
/// This struct is just a wrapper of the root [`Node`].
///
/// Classification is a total function: a record carrying an attribute
/// value never observed during training, or missing an attribute
/// altogether, receives the majority label stored at the node where the
/// traversal got stuck. No input record makes classification fail.
///
/// # Example
/// ```
/// use categorical_tree::{Record, Table, build};
///
/// let table = Table::from_columns([
///     ("color", vec!["red", "red", "green", "green"]),
///     ("class", vec!["a",   "a",   "b",     "b"]),
/// ]).unwrap();
/// let tree = build(&table, "class").unwrap();
///
/// assert_eq!(tree.classify(&Record::from_iter([("color", "red")])), "a");
/// // `blue` was never observed; the root's majority label breaks the
/// // 2-vs-2 tie to the lexicographically smaller `a`.
/// assert_eq!(tree.classify(&Record::from_iter([("color", "blue")])), "a");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node,
}

impl From<Node> for DecisionTreeClassifier {
    fn from(root: Node) -> Self {
        Self { root }
    }
}

impl DecisionTreeClassifier {
    /// Returns the root node of the tree.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Classify a single record. Never fails; see the type-level docs
    /// for the unseen-value behavior.
    pub fn classify(&self, record: &Record) -> &str {
        self.root.classify(record)
    }

    /// Classify row `row` of `table` in place, without extracting a
    /// [`Record`].
    ///
    /// This method panics when `row` is out of bounds for `table`.
    pub fn classify_row(&self, table: &Table, row: usize) -> &str {
        self.root.classify_row(table, row)
    }

    /// Classify every record, returning the labels in input order.
    pub fn classify_all(&self, records: &[Record]) -> Vec<String> {
        records.par_iter()
            .map(|record| self.classify(record).to_string())
            .collect()
    }

    /// Classify every row of `table`, returning the labels in row order.
    pub fn classify_table(&self, table: &Table) -> Vec<String> {
        let (n_rows, _) = table.shape();
        (0..n_rows).into_par_iter()
            .map(|row| self.classify_row(table, row).to_string())
            .collect()
    }
}

impl fmt::Display for DecisionTreeClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            Node::Leaf { label } => {
                write!(f, "Decision tree: single leaf `{label}`")
            },
            Node::Branch { split_attribute, .. } => {
                write!(
                    f,
                    "Decision tree: {nodes} nodes, depth {depth}, \
                     root split on `{split_attribute}`",
                    nodes = self.root.node_count(),
                    depth = self.root.depth(),
                )
            },
        }
    }
}
