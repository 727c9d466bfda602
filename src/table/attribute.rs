//! A single categorical column of a table.

use std::collections::HashSet;
use std::ops::Index;

/// One named column of categorical values.
///
/// Values are plain strings; any discrete token works. The row order of
/// `values` is the row order of the owning [`Table`](crate::Table).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    values: Vec<String>,
}

impl Attribute {
    /// Construct an empty attribute named `name`.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into(), values: Vec::new(), }
    }

    /// Construct an attribute from a name and its column of values.
    pub fn from_values<S, I, V>(name: S, values: I) -> Self
        where S: Into<String>,
              I: IntoIterator<Item = V>,
              V: Into<String>,
    {
        let values = values.into_iter()
            .map(Into::into)
            .collect();
        Self { name: name.into(), values, }
    }

    /// Returns the name of this attribute.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of rows in this column.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if this column holds no rows.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value at row `row`.
    ///
    /// This method panics when `row` is out of bounds.
    pub fn at(&self, row: usize) -> &str {
        &self.values[row]
    }

    /// Returns the full column of values in row order.
    pub fn values(&self) -> &[String] {
        &self.values[..]
    }

    /// Returns the number of distinct values appearing in this column.
    pub fn distinct_value_count(&self) -> usize {
        self.values.iter()
            .map(String::as_str)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Append a value as a new row of this column.
    pub(crate) fn append(&mut self, value: String) {
        self.values.push(value);
    }
}

impl Index<usize> for Attribute {
    type Output = str;

    fn index(&self, row: usize) -> &Self::Output {
        &self.values[row]
    }
}
