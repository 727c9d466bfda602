//! The columnar table of categorical training or testing data.

use std::collections::HashMap;
use std::ops::Index;

use crate::error::InvalidInputError;
use super::attribute::Attribute;
use super::record::Record;

/// A batch of rows stored column-wise.
///
/// Every column is an [`Attribute`] of equal length; one of them typically
/// serves as the target when training. The table itself does not single
/// out a target column, so the same type carries both training and testing
/// data.
///
/// # Example
/// ```
/// use categorical_tree::Table;
///
/// let table = Table::from_columns([
///     ("color", vec!["red", "green", "red"]),
///     ("size",  vec!["big", "small", "small"]),
/// ]).unwrap();
/// assert_eq!(table.shape(), (3, 2));
/// assert_eq!(table["color"].at(1), "green");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    name_to_index: HashMap<String, usize>,
    attributes: Vec<Attribute>,
    n_rows: usize,
}

impl Table {
    /// Build a table from `(name, values)` columns.
    ///
    /// All columns must have the same length and distinct names.
    pub fn from_columns<S, I, V, C>(columns: C) -> Result<Self, InvalidInputError>
        where C: IntoIterator<Item = (S, I)>,
              S: Into<String>,
              I: IntoIterator<Item = V>,
              V: Into<String>,
    {
        let attributes = columns.into_iter()
            .map(|(name, values)| Attribute::from_values(name, values))
            .collect::<Vec<_>>();

        let n_rows = attributes.first()
            .map(Attribute::len)
            .unwrap_or(0);
        for attribute in &attributes {
            if attribute.len() != n_rows {
                return Err(InvalidInputError::RaggedColumn {
                    name: attribute.name().to_string(),
                    expected: n_rows,
                    got: attribute.len(),
                });
            }
        }

        let name_to_index = index_by_name(&attributes)?;

        Ok(Self { name_to_index, attributes, n_rows, })
    }

    /// Build a table from a header and row-major data.
    ///
    /// Every row must have exactly one value per header entry.
    ///
    /// # Example
    /// ```
    /// use categorical_tree::Table;
    ///
    /// let table = Table::from_rows(
    ///     ["color", "size"],
    ///     [
    ///         ["red",   "big"],
    ///         ["green", "small"],
    ///     ],
    /// ).unwrap();
    /// assert_eq!(table.shape(), (2, 2));
    /// ```
    pub fn from_rows<S, R, I, V>(header: R, rows: I) -> Result<Self, InvalidInputError>
        where S: Into<String>,
              R: IntoIterator<Item = S>,
              I: IntoIterator,
              I::Item: IntoIterator<Item = V>,
              V: Into<String>,
    {
        let mut attributes = header.into_iter()
            .map(Attribute::new)
            .collect::<Vec<_>>();
        let n_attributes = attributes.len();

        let mut n_rows = 0_usize;
        for (row, values) in rows.into_iter().enumerate() {
            let mut n_values = 0_usize;
            for value in values {
                if n_values < n_attributes {
                    attributes[n_values].append(value.into());
                }
                n_values += 1;
            }

            if n_values != n_attributes {
                return Err(InvalidInputError::RaggedRow {
                    row,
                    expected: n_attributes,
                    got: n_values,
                });
            }
            n_rows += 1;
        }

        let name_to_index = index_by_name(&attributes)?;

        Ok(Self { name_to_index, attributes, n_rows, })
    }

    /// Returns the pair of the number of rows and the number of columns.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.attributes.len())
    }

    /// Returns a slice over all columns.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes[..]
    }

    /// Returns the column index of the attribute named `name`, if any.
    pub fn attribute_index(&self, name: &str) -> Option<usize> {
        self.name_to_index.get(name).copied()
    }

    /// Extract row `row` as an owned [`Record`].
    ///
    /// This method panics when `row` is out of bounds.
    pub fn record(&self, row: usize) -> Record {
        self.attributes.iter()
            .map(|attribute| (attribute.name(), attribute.at(row)))
            .collect()
    }
}

/// Map every attribute name to its column index,
/// rejecting duplicated names.
fn index_by_name(attributes: &[Attribute])
    -> Result<HashMap<String, usize>, InvalidInputError>
{
    let mut name_to_index = HashMap::with_capacity(attributes.len());
    for (i, attribute) in attributes.iter().enumerate() {
        let old = name_to_index.insert(attribute.name().to_string(), i);
        if old.is_some() {
            return Err(InvalidInputError::DuplicateAttribute(
                attribute.name().to_string()
            ));
        }
    }
    Ok(name_to_index)
}

impl<S> Index<S> for Table
    where S: AsRef<str>,
{
    type Output = Attribute;

    /// Returns the column named `name`.
    ///
    /// This method panics when no such column exists; use
    /// [`Table::attribute_index`] for a fallible lookup.
    fn index(&self, name: S) -> &Self::Output {
        let name = name.as_ref();
        let k = match self.name_to_index.get(name) {
            Some(&k) => k,
            None => panic!("no attribute named `{name}` in the table"),
        };
        &self.attributes[k]
    }
}
