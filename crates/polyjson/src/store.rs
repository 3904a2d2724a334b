//! Single-file text store for the canonical document form.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Truncating write of the full text; contents are flushed before return.
pub fn write(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text)?;
    Ok(())
}

/// Read the full contents of `path` as text.
pub fn read(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}
