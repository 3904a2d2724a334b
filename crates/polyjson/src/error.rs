use std::io;
use std::num::ParseFloatError;
use std::string::FromUtf8Error;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("base64 decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("decoded payload is not valid UTF-8: {0}")]
    NonUtf8(#[from] FromUtf8Error),

    #[error("invalid decimal number {text:?}: {source}")]
    Number {
        text: String,
        source: ParseFloatError,
    },

    #[error("missing field at {path}")]
    MissingField { path: String },

    #[error("type mismatch at {path}: expected {expected}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
