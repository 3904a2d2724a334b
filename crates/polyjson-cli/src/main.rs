use std::io::stdout;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "polyjson-cli",
    about = "Round-trip a quadratic polynomial JSON document and derive its constant from Base64-encoded roots",
    version
)]
struct Args {
    /// Document path (defaults to polynomial.json in the working directory)
    path: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let path = args
        .path
        .unwrap_or_else(|| PathBuf::from(polyjson::pipeline::DEFAULT_PATH));

    let mut out = stdout().lock();
    polyjson::pipeline::run(&path, &mut out)?;
    Ok(())
}
