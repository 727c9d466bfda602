//! Error types for table construction and tree building.

use thiserror::Error;

/// The error returned when a table or a training request is malformed.
///
/// Classification never produces this error: a record holding a value that
/// was never observed during training is handled by the majority-label
/// fallback, not by failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    /// The table holds no rows, so there is nothing to measure or learn.
    #[error("the table has no rows")]
    EmptyTable,

    /// A named attribute does not exist among the table's columns.
    #[error("no attribute named `{0}` in the table")]
    UnknownAttribute(String),

    /// The named target column does not exist among the table's columns.
    #[error("no target column named `{0}` in the table")]
    UnknownTarget(String),

    /// The target column was also listed as a candidate attribute.
    #[error("the target column `{0}` cannot be a candidate attribute")]
    TargetIsCandidate(String),

    /// A column's length disagrees with the other columns.
    #[error("column `{name}` has {got} rows, expected {expected}")]
    RaggedColumn {
        /// Name of the offending column.
        name: String,
        /// Row count of the columns seen so far.
        expected: usize,
        /// Row count of the offending column.
        got: usize,
    },

    /// A row's length disagrees with the header.
    #[error("row {row} has {got} values, expected {expected}")]
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Number of columns in the header.
        expected: usize,
        /// Number of values in the offending row.
        got: usize,
    },

    /// Two columns share the same name.
    #[error("duplicate attribute name `{0}`")]
    DuplicateAttribute(String),
}
