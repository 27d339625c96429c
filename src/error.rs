use std::error::Error as StdError;
use std::result::Result as StdResult;

/// A specialized `Result` type for this crate.
pub type Result<T> = StdResult<T, Error>;

/// Convenience alias for the boxed errors handed back by decoding policies.
pub type BoxDynError = Box<dyn StdError + 'static + Send + Sync>;

/// Represents all the ways row access can fail.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// No column found for the given name.
    ///
    /// Raised only by [`SqlRow::decode`]; [`SqlRow::decode_nil`] reads a
    /// missing column as `NULL` instead.
    ///
    /// [`SqlRow::decode`]: crate::SqlRow::decode
    /// [`SqlRow::decode_nil`]: crate::SqlRow::decode_nil
    #[error("no column found for name: {0}")]
    MissingColumn(String),

    /// Error occurred while decoding a value from a specific column.
    ///
    /// The decoding policy's own error is preserved unchanged as the source.
    #[error("error occurred while decoding column {column}: {source}")]
    ColumnDecode {
        column: String,

        #[source]
        source: BoxDynError,
    },
}
