//! Strict hex decoding of the input value.

use crate::error::Error;

/// Decode `value` (read from variable `var`) into bytes.
///
/// Each pair of hex digits becomes one byte, high nibble first. Upper, lower
/// and mixed case are accepted; whitespace and any other character are not.
/// An empty string decodes to an empty buffer.
///
/// # Errors
/// `Error::InvalidHex` wrapping `hex::FromHexError::OddLength` or
/// `InvalidHexCharacter { c, index }`.
pub fn decode_hex(var: &'static str, value: &str) -> Result<Vec<u8>, Error> {
    hex::decode(value).map_err(|source| Error::InvalidHex { var, source })
}
