//! Traits for decoding raw column data into Rust values.

use crate::error::BoxDynError;

/// A decoding policy for one database backend.
///
/// A `Decoder` value travels with every row view and is consulted for each
/// typed decode. Implementations carry whatever conversion configuration
/// their backend needs; the raw column data stays opaque to the generic row
/// contract.
pub trait Decoder {
    /// Raw column data handed over by the backend driver.
    type Data;
}

/// A type that can be decoded from raw column data under the policy `D`.
pub trait Decode<D: Decoder>: Sized {
    fn decode(decoder: &D, data: D::Data) -> Result<Self, BoxDynError>;
}
