//! Base64 codec (standard alphabet, padded) and decimal text parsing.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::{Error, Result};

/// Encode arbitrary bytes to Base64 text. Never fails for byte input.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode Base64 text back to the original bytes.
/// Fails on invalid length or characters outside the standard alphabet.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(text)?)
}

/// Decode Base64 text whose payload is expected to be UTF-8 text.
pub fn decode_text(text: &str) -> Result<String> {
    Ok(String::from_utf8(decode(text)?)?)
}

/// Parse decimal text to `f64` with the host's standard parsing semantics.
pub fn parse_decimal(text: &str) -> Result<f64> {
    text.parse::<f64>().map_err(|source| Error::Number {
        text: text.to_string(),
        source,
    })
}
