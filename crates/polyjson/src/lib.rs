//! Round-trips a small JSON document holding a quadratic polynomial's
//! coefficients and two Base64-encoded root strings, then derives the
//! missing constant coefficient from the decoded roots via Vieta's
//! product-of-roots formula.
//!
//! The whole crate is one fixed pipeline over one example document
//! (`a = 2`, `b = -7`, roots `2` and `5`); see [`pipeline::run`].

pub mod codec;
pub mod doc;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod store;
pub mod vieta;

pub use crate::error::{Error, Result};
pub use crate::model::{EncodedRoots, FORM, Polynomial, QuadraticDoc};
