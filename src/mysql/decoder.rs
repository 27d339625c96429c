use mysql_async::Value;
use mysql_common::value::convert::{from_value_opt, FromValue, FromValueError};

use crate::decode::{Decode, Decoder};
use crate::error::BoxDynError;

/// The decoding policy applied to MySQL column data.
///
/// Conversion rules themselves live in the driver's [`FromValue`]
/// implementations; this is the value row views carry and consult on every
/// typed decode, so generic code can thread one policy through without
/// naming the backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct MySqlDataDecoder;

impl MySqlDataDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Convert raw column data into `T`.
    ///
    /// On failure the driver hands back the rejected [`Value`] inside the
    /// error.
    pub fn decode<T>(&self, data: Value) -> Result<T, FromValueError>
    where
        T: FromValue,
    {
        from_value_opt(data)
    }
}

impl Decoder for MySqlDataDecoder {
    type Data = Value;
}

impl<T> Decode<MySqlDataDecoder> for T
where
    T: FromValue,
{
    fn decode(decoder: &MySqlDataDecoder, data: Value) -> Result<Self, BoxDynError> {
        decoder.decode(data).map_err(Into::into)
    }
}
