//! The database-agnostic row contract.

use crate::decode::{Decode, Decoder};
use crate::error::Result;

/// A uniform view over one result row.
///
/// Generic row-consuming code written against this trait works unchanged
/// whether the row came from MySQL or any other backend implementing it.
/// Every operation is a pure read of already-materialized data; implementors
/// hold no connection and nothing here is ever retried.
pub trait SqlRow {
    /// The decoding policy carried by this row view.
    type Decoder: Decoder;

    /// The ordered column names of this row, as projected by the query.
    fn all_columns(&self) -> Vec<String>;

    /// Whether the row has a column with the given name.
    ///
    /// Matching is exact and case-sensitive.
    fn contains(&self, column: &str) -> bool;

    /// Whether the named column reads as SQL `NULL`.
    ///
    /// A column missing from the row entirely also reads as `NULL`. This is
    /// deliberately looser than [`decode`], which treats a missing column as
    /// an error; nil-checking stays usable for columns that may or may not
    /// be projected.
    ///
    /// [`decode`]: Self::decode
    fn decode_nil(&self, column: &str) -> Result<bool>;

    /// Decode the named column into `T`.
    ///
    /// Fails with [`Error::MissingColumn`] if the row has no such column,
    /// and with [`Error::ColumnDecode`] if the decoding policy rejects the
    /// raw data.
    ///
    /// [`Error::MissingColumn`]: crate::Error::MissingColumn
    /// [`Error::ColumnDecode`]: crate::Error::ColumnDecode
    fn decode<T>(&self, column: &str) -> Result<T>
    where
        T: Decode<Self::Decoder>;
}
