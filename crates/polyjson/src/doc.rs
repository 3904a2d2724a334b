//! Dynamic document access over `serde_json::Value`.
//!
//! The canonical text form is pretty-printed JSON with two-space indent and
//! a trailing newline; map key order follows insertion order (serde_json's
//! `preserve_order` feature). Navigation and coercions fail loudly instead
//! of silently casting.

use serde_json::Value;

use crate::error::{Error, Result};

/// Serialize a value to its canonical text form.
pub fn to_text(value: &Value) -> Result<String> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}

/// Parse canonical text back to a value.
/// Fails on unterminated structures, invalid literals, or trailing garbage.
pub fn from_text(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}

/// Navigate nested maps/arrays by a sequence of keys.
/// Array steps are decimal indices.
pub fn get<'a>(root: &'a Value, path: &[&str]) -> Result<&'a Value> {
    let mut current = root;
    let mut walked = String::new();
    for key in path {
        walked.push('/');
        walked.push_str(key);
        current = match current {
            Value::Object(map) => map.get(*key).ok_or_else(|| Error::MissingField {
                path: walked.clone(),
            })?,
            Value::Array(items) => key
                .parse::<usize>()
                .ok()
                .and_then(|i| items.get(i))
                .ok_or_else(|| Error::MissingField {
                    path: walked.clone(),
                })?,
            _ => {
                return Err(Error::TypeMismatch {
                    path: walked,
                    expected: "object or array",
                });
            }
        };
    }
    Ok(current)
}

/// Mutable counterpart of [`get`], for in-place field updates.
pub fn get_mut<'a>(root: &'a mut Value, path: &[&str]) -> Result<&'a mut Value> {
    let mut current = root;
    let mut walked = String::new();
    for key in path {
        walked.push('/');
        walked.push_str(key);
        current = match current {
            Value::Object(map) => map.get_mut(*key).ok_or_else(|| Error::MissingField {
                path: walked.clone(),
            })?,
            Value::Array(items) => {
                let index = key.parse::<usize>().ok();
                index
                    .and_then(|i| items.get_mut(i))
                    .ok_or_else(|| Error::MissingField {
                        path: walked.clone(),
                    })?
            }
            _ => {
                return Err(Error::TypeMismatch {
                    path: walked,
                    expected: "object or array",
                });
            }
        };
    }
    Ok(current)
}

pub fn as_integer(value: &Value, path: &str) -> Result<i64> {
    value.as_i64().ok_or(Error::TypeMismatch {
        path: path.to_string(),
        expected: "integer",
    })
}

/// Integer numbers are representable as floats and coerce successfully.
pub fn as_float(value: &Value, path: &str) -> Result<f64> {
    value.as_f64().ok_or(Error::TypeMismatch {
        path: path.to_string(),
        expected: "number",
    })
}

pub fn as_string<'a>(value: &'a Value, path: &str) -> Result<&'a str> {
    value.as_str().ok_or(Error::TypeMismatch {
        path: path.to_string(),
        expected: "string",
    })
}
