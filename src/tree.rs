//! Decision tree induction and classification.
//!
//! [`DecisionTreeBuilder`] grows a tree over a [`Table`](crate::Table);
//! the result is a [`DecisionTreeClassifier`] wrapping an immutable
//! [`Node`] structure. The splitting metrics live in [`purity`].

pub mod builder;
pub mod classifier;
pub mod node;
pub mod purity;

pub use builder::{
    DecisionTreeBuilder,
    build,
};
pub use classifier::DecisionTreeClassifier;
pub use node::Node;
pub use purity::{
    Purity,
    gain,
    gain_ratio,
    impurity,
    split_info,
};
