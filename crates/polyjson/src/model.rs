//! Typed document records. Field declaration order fixes the JSON key
//! order of the serialized document.

use serde::{Deserialize, Serialize};

use crate::codec;

/// Fixed descriptive form string carried by every document.
pub const FORM: &str = "ax^2 + bx + c = 0";

/// Quadratic coefficients. `c` starts out unset and serializes as `null`
/// until the pipeline derives it from the roots. `a` must not be zero;
/// this is assumed, not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polynomial {
    pub a: i64,
    pub b: i64,
    pub c: Option<f64>,
    pub form: String,
}

impl Polynomial {
    pub fn new(a: i64, b: i64) -> Self {
        Self {
            a,
            b,
            c: None,
            form: FORM.to_string(),
        }
    }
}

/// Base64-encoded plain-text decimal representations of the two roots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedRoots {
    pub alpha: String,
    pub beta: String,
}

impl EncodedRoots {
    /// Encode roots given as plain decimal text (e.g. `"2"`, `"5"`).
    pub fn from_plain(alpha: &str, beta: &str) -> Self {
        Self {
            alpha: codec::encode(alpha.as_bytes()),
            beta: codec::encode(beta.as_bytes()),
        }
    }
}

/// The combined on-disk document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadraticDoc {
    pub polynomial: Polynomial,
    pub roots_base64: EncodedRoots,
}

impl QuadraticDoc {
    pub fn new(a: i64, b: i64, alpha_plain: &str, beta_plain: &str) -> Self {
        Self {
            polynomial: Polynomial::new(a, b),
            roots_base64: EncodedRoots::from_plain(alpha_plain, beta_plain),
        }
    }
}
