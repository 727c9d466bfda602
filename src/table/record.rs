//! A single row of categorical values, keyed by attribute name.

use serde::{Serialize, Deserialize};

use std::collections::BTreeMap;

/// One observation to classify: an ordered map from attribute name to
/// categorical value.
///
/// A record is expected to cover the attribute names used during training,
/// but its *values* may include categories the training data never showed.
/// Missing attributes are also tolerated; both cases resolve through the
/// majority-label fallback during classification.
///
/// # Example
/// ```
/// use categorical_tree::Record;
///
/// let record = Record::from_iter([("outlook", "sunny"), ("wind", "weak")]);
/// assert_eq!(record.get("outlook"), Some("sunny"));
/// assert_eq!(record.get("humidity"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    values: BTreeMap<String, String>,
}

impl Record {
    /// Returns the value stored for attribute `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns the number of attributes in this record.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if this record holds no attributes.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(attribute name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<BTreeMap<String, String>> for Record {
    fn from(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }
}

impl<K, V> FromIterator<(K, V)> for Record
    where K: Into<String>,
          V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let values = iter.into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { values }
    }
}
