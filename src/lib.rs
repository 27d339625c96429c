//! Database-agnostic row access over MySQL result rows.
//!
//! This crate adapts rows produced by the [`mysql_async`] driver to a small,
//! backend-neutral row contract: list columns, check presence, check
//! nullability, decode a named column into a typed value. One decoding
//! policy value travels with each row view; query execution and the
//! conversion rules themselves stay in the driver.
//!
//! ```no_run
//! use mysql_async::prelude::*;
//! use sqlrow::mysql::MySqlRowExt;
//! use sqlrow::SqlRow;
//!
//! # async fn example(conn: &mut mysql_async::Conn) -> anyhow::Result<()> {
//! let row: mysql_async::Row = conn
//!     .query_first("SELECT 1 AS id, 'vapor' AS name")
//!     .await?
//!     .expect("one row");
//!
//! let row = row.sql();
//!
//! assert_eq!(row.all_columns(), ["id", "name"]);
//! assert_eq!(row.decode::<i32>("id")?, 1);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(future_incompatible)]

mod decode;
mod error;
mod row;

pub mod mysql;

pub use decode::{Decode, Decoder};
pub use error::{BoxDynError, Error, Result};
pub use row::SqlRow;
