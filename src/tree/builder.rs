//! Recursive tree construction.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::error::InvalidInputError;
use crate::table::Table;
use super::classifier::DecisionTreeClassifier;
use super::node::Node;
use super::purity::{
    Purity,
    partition,
    select_best,
    value_counts,
};

/// A builder that grows a [`DecisionTreeClassifier`] from a [`Table`].
///
/// By default the last column is the target, every other column is a
/// candidate attribute, and the gain side of the criterion uses
/// [`Purity::Gini`].
///
/// # Example
/// ```
/// use categorical_tree::{DecisionTreeBuilder, Purity, Table};
///
/// let table = Table::from_columns([
///     ("color", vec!["red", "red", "green", "green"]),
///     ("size",  vec!["big", "small", "big", "small"]),
///     ("class", vec!["a",   "a",     "b",   "b"]),
/// ]).unwrap();
///
/// let tree = DecisionTreeBuilder::new(&table)
///     .target("class")
///     .purity(Purity::Gini)
///     .fit()
///     .unwrap();
/// assert_eq!(tree.root().label(), "a");
/// ```
#[derive(Clone)]
pub struct DecisionTreeBuilder<'a> {
    table: &'a Table,
    target: Option<String>,
    attributes: Option<Vec<String>>,
    purity: Purity,
}

impl<'a> DecisionTreeBuilder<'a> {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    pub fn new(table: &'a Table) -> Self {
        Self {
            table,
            target: None,
            attributes: None,
            purity: Purity::default(),
        }
    }

    /// Name the target column.
    /// Without this call the table's last column is the target.
    pub fn target<S: Into<String>>(mut self, name: S) -> Self {
        self.target = Some(name.into());
        self
    }

    /// Restrict the candidate attributes to the given names.
    /// Without this call every non-target column is a candidate.
    pub fn attributes<I, S>(mut self, names: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>,
    {
        let names = names.into_iter()
            .map(Into::into)
            .collect();
        self.attributes = Some(names);
        self
    }

    /// Set the impurity measure for the gain side of the criterion.
    /// Default value is [`Purity::Gini`]. See [`Purity`] for the choices.
    pub fn purity(mut self, purity: Purity) -> Self {
        self.purity = purity;
        self
    }

    /// Grow the tree. This method consumes `self`.
    ///
    /// # Errors
    /// [`InvalidInputError`] when the table is empty, the target column is
    /// missing, a listed candidate attribute is missing, or the target is
    /// also listed as a candidate.
    pub fn fit(self) -> Result<DecisionTreeClassifier, InvalidInputError> {
        let (n_rows, n_columns) = self.table.shape();
        if n_rows == 0 || n_columns == 0 {
            return Err(InvalidInputError::EmptyTable);
        }

        let target = match &self.target {
            Some(name) => {
                self.table.attribute_index(name)
                    .ok_or_else(|| {
                        InvalidInputError::UnknownTarget(name.clone())
                    })?
            },
            None => n_columns - 1,
        };

        let candidates = match &self.attributes {
            Some(names) => {
                let mut candidates = Vec::with_capacity(names.len());
                for name in names {
                    let column = self.table.attribute_index(name)
                        .ok_or_else(|| {
                            InvalidInputError::UnknownAttribute(name.clone())
                        })?;
                    if column == target {
                        return Err(InvalidInputError::TargetIsCandidate(
                            name.clone()
                        ));
                    }
                    candidates.push(column);
                }
                candidates
            },
            None => {
                (0..n_columns).filter(|&column| column != target)
                    .collect()
            },
        };

        let rows = (0..n_rows).collect::<Vec<usize>>();
        let root = grow(self.table, rows, candidates, target, self.purity);

        Ok(DecisionTreeClassifier::from(root))
    }
}

/// Build a decision tree over `table` with `target` as the label column,
/// every other column as a candidate attribute, and the default Gini
/// purity.
///
/// This is shorthand for
/// `DecisionTreeBuilder::new(table).target(target).fit()`.
///
/// # Errors
/// [`InvalidInputError::EmptyTable`] when the table has no rows, and
/// [`InvalidInputError::UnknownTarget`] when no column is named `target`.
pub fn build(table: &Table, target: &str)
    -> Result<DecisionTreeClassifier, InvalidInputError>
{
    DecisionTreeBuilder::new(table)
        .target(target)
        .fit()
}

/// Recursively grow the subtree for the partition `rows`.
///
/// `rows` is never empty: the root call checks the table and every
/// recursive call passes a partition block. Each recursion removes the
/// chosen attribute from `candidates`, which bounds the depth.
fn grow(
    table: &Table,
    rows: Vec<usize>,
    candidates: Vec<usize>,
    target: usize,
    purity: Purity,
) -> Node
{
    // The majority label doubles as the unseen-value fallback, so it is
    // computed for every node, not only for leaves.
    let counts = value_counts(table, &rows, target);
    let label = majority_label(&counts);

    let pure = counts.len() == 1;
    if pure
        || candidates.is_empty()
        || !discriminating(table, &rows, &candidates)
    {
        return Node::leaf(label);
    }

    let best = match select_best(table, &rows, &candidates, target, purity) {
        Some(column) => column,
        // No candidate attains a positive gain ratio.
        None => return Node::leaf(label),
    };

    let split_attribute = table.attributes()[best].name().to_string();
    let remaining = candidates.iter()
        .copied()
        .filter(|&column| column != best)
        .collect::<Vec<_>>();

    // `partition` iterates values in sorted order, so the children are
    // grown deterministically.
    let children = partition(table, &rows, best)
        .into_iter()
        .map(|(value, subset)| {
            let child = grow(table, subset, remaining.clone(), target, purity);
            (value.to_string(), child)
        })
        .collect::<BTreeMap<_, _>>();

    Node::branch(split_attribute, label, children)
}

/// The most frequent value in a count map, ties broken by choosing the
/// lexicographically smallest tied value.
fn majority_label(counts: &HashMap<&str, usize>) -> String {
    let max_count = counts.values()
        .copied()
        .max()
        .unwrap_or(0);

    counts.iter()
        .filter(|(_, &count)| count == max_count)
        .map(|(&value, _)| value)
        .min()
        .unwrap_or_default()
        .to_string()
}

/// Returns `true` if the candidate columns still hold more than one
/// distinct value over `rows`. With a single distinct value overall, no
/// candidate can discriminate and growing must stop.
fn discriminating(table: &Table, rows: &[usize], candidates: &[usize])
    -> bool
{
    let mut seen = HashSet::new();
    for &column in candidates {
        let attribute = &table.attributes()[column];
        for &i in rows {
            seen.insert(attribute.at(i));
            if seen.len() > 1 {
                return true;
            }
        }
    }
    false
}
