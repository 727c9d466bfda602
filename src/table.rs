//! The categorical data layer.
//!
//! A [`Table`] stores a dataset column-wise: one [`Attribute`] per column,
//! each holding the categorical values of every row. A [`Record`] is a
//! single row in map form, used when classifying unseen data.

mod attribute;
mod record;
mod table_struct;

pub use attribute::Attribute;
pub use record::Record;
pub use table_struct::Table;
