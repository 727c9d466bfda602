#![warn(missing_docs)]

//!
//! A decision tree classifier for purely categorical data.
//!
//! This crate builds a multi-way decision tree from a labeled table of
//! categorical attributes and applies it to classify unseen records.
//! Splits are chosen by **gain ratio**: the reduction in impurity obtained
//! by partitioning on an attribute, normalized by the entropy of the
//! attribute's own value distribution. Every distinct value of the chosen
//! attribute becomes its own branch, so the tree is multi-way rather than
//! binary.
//!
//! Tree construction is deterministic: ties between equally good
//! attributes go to the lexicographically smaller name, majority labels
//! break ties the same way, and children are grown in sorted value order.
//! Classification is total; a record carrying a value never observed
//! during training falls back to the majority label stored at the node
//! where the traversal got stuck.
//!
//! The crate expects a clean categorical table. Binning continuous
//! attributes, dropping invalid rows, and reading files are jobs for the
//! surrounding tooling.
//!
//! # Example
//! ```
//! use categorical_tree::{Record, Table, build};
//!
//! let table = Table::from_columns([
//!     ("outlook", vec!["sunny", "sunny", "rainy", "rainy"]),
//!     ("wind",    vec!["weak",  "strong", "weak",  "strong"]),
//!     ("play",    vec!["yes",   "yes",    "no",    "no"]),
//! ]).unwrap();
//!
//! let tree = build(&table, "play").unwrap();
//!
//! let record = Record::from_iter([("outlook", "sunny"), ("wind", "weak")]);
//! assert_eq!(tree.classify(&record), "yes");
//! ```

pub mod error;
pub mod table;
pub mod tree;

pub use error::InvalidInputError;

pub use table::{
    Attribute,
    Record,
    Table,
};

pub use tree::{
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Node,
    Purity,
    build,
    gain,
    gain_ratio,
    impurity,
    split_info,
};
