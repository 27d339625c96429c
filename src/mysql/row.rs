use mysql_async::{Row, Value};

use crate::decode::Decode;
use crate::error::{Error, Result};
use crate::mysql::MySqlDataDecoder;
use crate::row::SqlRow;

/// A [`SqlRow`] view over one [`mysql_async::Row`].
///
/// Built per row, typically right before use; holds the driver row and the
/// decoding policy it was wrapped with, nothing else.
#[derive(Debug)]
pub struct MySqlSqlRow {
    row: Row,
    decoder: MySqlDataDecoder,
}

impl MySqlSqlRow {
    pub fn new(row: Row, decoder: MySqlDataDecoder) -> Self {
        Self { row, decoder }
    }

    /// The underlying driver row.
    pub fn as_row(&self) -> &Row {
        &self.row
    }

    /// Unwrap back into the driver row.
    pub fn into_row(self) -> Row {
        self.row
    }

    fn ordinal(&self, column: &str) -> Option<usize> {
        // Names are matched on raw bytes: exact and case-sensitive.
        self.row
            .columns_ref()
            .iter()
            .position(|col| col.name_ref() == column.as_bytes())
    }
}

impl SqlRow for MySqlSqlRow {
    type Decoder = MySqlDataDecoder;

    fn all_columns(&self) -> Vec<String> {
        self.row
            .columns_ref()
            .iter()
            .map(|col| col.name_str().into_owned())
            .collect()
    }

    fn contains(&self, column: &str) -> bool {
        self.ordinal(column).is_some()
    }

    fn decode_nil(&self, column: &str) -> Result<bool> {
        // A column the row does not have reads as NULL rather than erroring;
        // decode() takes the strict view. A value already taken out of the
        // row is gone and reads as NULL too.
        Ok(match self.ordinal(column).and_then(|i| self.row.as_ref(i)) {
            Some(value) => matches!(value, Value::NULL),
            None => true,
        })
    }

    fn decode<T>(&self, column: &str) -> Result<T>
    where
        T: Decode<MySqlDataDecoder>,
    {
        let value = self
            .ordinal(column)
            .and_then(|i| self.row.as_ref(i))
            .ok_or_else(|| Error::MissingColumn(column.to_string()))?;

        T::decode(&self.decoder, value.clone()).map_err(|source| Error::ColumnDecode {
            column: column.to_string(),
            source,
        })
    }
}

/// Conversion from driver rows into the generic row view.
pub trait MySqlRowExt {
    /// Wrap this row with the default decoding policy.
    fn sql(self) -> MySqlSqlRow;

    /// Wrap this row with an explicit decoding policy.
    fn sql_with(self, decoder: MySqlDataDecoder) -> MySqlSqlRow;
}

impl MySqlRowExt for Row {
    fn sql(self) -> MySqlSqlRow {
        self.sql_with(MySqlDataDecoder::default())
    }

    fn sql_with(self, decoder: MySqlDataDecoder) -> MySqlSqlRow {
        MySqlSqlRow::new(self, decoder)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mysql_common::constants::ColumnType;
    use mysql_common::packets::Column;
    use mysql_common::row::new_row;
    use mysql_common::value::convert::FromValueError;

    use super::*;

    fn column(name: &str, column_type: ColumnType) -> Column {
        Column::new(column_type).with_name(name.as_bytes())
    }

    // Text-protocol shape: every non-NULL value arrives as raw bytes.
    fn vapor_row() -> Row {
        new_row(
            vec![
                Value::Bytes(b"-1".to_vec()),
                Value::Bytes(b"vapor".to_vec()),
            ],
            Arc::from(vec![
                column("id", ColumnType::MYSQL_TYPE_LONG),
                column("name", ColumnType::MYSQL_TYPE_VAR_STRING),
            ]),
        )
    }

    fn null_name_row() -> Row {
        new_row(
            vec![Value::Bytes(b"1".to_vec()), Value::NULL],
            Arc::from(vec![
                column("id", ColumnType::MYSQL_TYPE_LONG),
                column("name", ColumnType::MYSQL_TYPE_VAR_STRING),
            ]),
        )
    }

    #[test]
    fn all_columns_follow_projection_order() {
        let row = vapor_row().sql();

        assert_eq!(row.all_columns(), ["id", "name"]);
    }

    #[test]
    fn contains_is_exact_and_case_sensitive() {
        let row = vapor_row().sql();

        for name in row.all_columns() {
            assert!(row.contains(&name));
        }
        assert!(!row.contains("ID"));
        assert!(!row.contains("missing"));
    }

    #[test]
    fn decodes_the_requested_types() {
        let row = vapor_row().sql();

        assert_eq!(row.decode::<i32>("id").unwrap(), -1);
        assert_eq!(row.decode::<String>("name").unwrap(), "vapor");
    }

    #[test]
    fn missing_column_is_null_for_decode_nil_but_an_error_for_decode() {
        let row = vapor_row().sql();

        // Deliberate asymmetry between the two lookups.
        assert!(row.decode_nil("missing").unwrap());

        match row.decode::<String>("missing").unwrap_err() {
            Error::MissingColumn(name) => assert_eq!(name, "missing"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn null_values_read_as_nil() {
        let row = null_name_row().sql();

        assert!(!row.decode_nil("id").unwrap());
        assert!(row.decode_nil("name").unwrap());
    }

    #[test]
    fn null_values_decode_into_options() {
        let row = null_name_row().sql();

        assert_eq!(row.decode::<Option<String>>("name").unwrap(), None);
        assert_eq!(row.decode::<Option<i32>>("id").unwrap(), Some(1));
    }

    #[test]
    fn conversion_failures_keep_the_driver_error() {
        let row = vapor_row().sql();

        match row.decode::<i32>("name").unwrap_err() {
            Error::ColumnDecode { column, source } => {
                assert_eq!(column, "name");
                assert!(source.is::<FromValueError>());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn reads_are_idempotent() {
        let row = vapor_row().sql();

        assert_eq!(row.all_columns(), row.all_columns());
        assert_eq!(row.contains("id"), row.contains("id"));
        assert_eq!(
            row.decode_nil("name").unwrap(),
            row.decode_nil("name").unwrap()
        );
        assert_eq!(
            row.decode::<String>("name").unwrap(),
            row.decode::<String>("name").unwrap()
        );
    }

    #[test]
    fn taken_values_read_as_absent() {
        let mut row = vapor_row();
        let _: Option<String> = row.take("name");

        let row = row.sql();

        assert!(row.decode_nil("name").unwrap());
        assert!(row.contains("name"));
        assert!(matches!(
            row.decode::<String>("name"),
            Err(Error::MissingColumn(_))
        ));
    }

    #[test]
    fn an_explicit_decoder_can_be_threaded_through() {
        let row = vapor_row().sql_with(MySqlDataDecoder::new());

        assert_eq!(row.decode::<i64>("id").unwrap(), -1);
    }
}
