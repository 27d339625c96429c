//! MySQL backend: exposes [`mysql_async`] rows through the generic
//! [`SqlRow`] contract.
//!
//! [`SqlRow`]: crate::SqlRow

mod decoder;
mod row;

pub use decoder::MySqlDataDecoder;
pub use row::{MySqlRowExt, MySqlSqlRow};
