//! The ten-step document pipeline: seed the file, read it back, decode the
//! roots, derive `c`, and overwrite the file with the completed document.

use std::io::Write;
use std::path::Path;

use serde_json::{Value, json};

use crate::error::Result;
use crate::model::QuadraticDoc;
use crate::{codec, doc, store, vieta};

/// Default document path, relative to the working directory.
pub const DEFAULT_PATH: &str = "polynomial.json";

/// Construct the hardcoded example document (`a = 2`, `b = -7`, roots
/// `2` and `5`, `c` unset) and write it to `path`.
pub fn write_seed<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    let seed = QuadraticDoc::new(2, -7, "2", "5");
    let value = serde_json::to_value(&seed)?;
    store::write(path, &doc::to_text(&value)?)?;
    writeln!(out, "JSON written to {}", path.display())?;
    Ok(())
}

/// Read the document back, decode the roots, derive the constant `c`,
/// and overwrite the file with the updated document.
///
/// Any failure (I/O, parse, shape mismatch, Base64, number format)
/// propagates before the file is rewritten.
pub fn derive_constant<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    let mut loaded = doc::from_text(&store::read(path)?)?;

    let a = doc::as_integer(doc::get(&loaded, &["polynomial", "a"])?, "/polynomial/a")?;
    let b = doc::as_integer(doc::get(&loaded, &["polynomial", "b"])?, "/polynomial/b")?;
    let alpha_b64 = doc::as_string(
        doc::get(&loaded, &["roots_base64", "alpha"])?,
        "/roots_base64/alpha",
    )?;
    let beta_b64 = doc::as_string(
        doc::get(&loaded, &["roots_base64", "beta"])?,
        "/roots_base64/beta",
    )?;

    let alpha = codec::parse_decimal(&codec::decode_text(alpha_b64)?)?;
    let beta = codec::parse_decimal(&codec::decode_text(beta_b64)?)?;

    let form = doc::as_string(
        doc::get(&loaded, &["polynomial", "form"])?,
        "/polynomial/form",
    )?;
    writeln!(out, "Decoded polynomial and roots:")?;
    writeln!(out, "  Form: {form}")?;
    writeln!(out, "  a = {}, b = {}, c = {}", a, b, render_c(&loaded)?)?;
    writeln!(out, "  alpha (root 1) = {alpha}")?;
    writeln!(out, "  beta  (root 2) = {beta}")?;

    let c_computed = vieta::constant_from_roots(a as f64, alpha, beta);
    writeln!(out)?;
    writeln!(out, "Computed values:")?;
    writeln!(
        out,
        "  alpha + beta = {} (should equal -b/a = {})",
        alpha + beta,
        vieta::sum_of_roots(a as f64, b as f64)
    )?;
    writeln!(
        out,
        "  alpha * beta = {} (this equals c/a)",
        alpha * beta
    )?;
    writeln!(out, "  Computed constant c = {c_computed}")?;

    *doc::get_mut(&mut loaded, &["polynomial", "c"])? = json!(c_computed);
    store::write(path, &doc::to_text(&loaded)?)?;
    writeln!(out)?;
    writeln!(out, "Updated JSON with computed c written to {}", path.display())?;
    Ok(())
}

/// Run the full pipeline against `path`, emitting status lines to `out`.
pub fn run<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    write_seed(path, out)?;
    derive_constant(path, out)
}

fn render_c(loaded: &Value) -> Result<String> {
    Ok(match doc::get(loaded, &["polynomial", "c"])? {
        Value::Null => "null".to_string(),
        other => other.to_string(),
    })
}
