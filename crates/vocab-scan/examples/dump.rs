use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use vocab_scan::Extractor;

fn main() -> Result<()> {
    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: cargo run -p vocab-scan --example dump -- <path-to-data-file>")?;

    let extractor = Extractor::default();
    let Some(entries) = extractor
        .scan_file(&path)
        .with_context(|| format!("scanning {}", path.display()))?
    else {
        println!("{} does not exist", path.display());
        return Ok(());
    };

    println!("File: {}", path.display());
    println!("Entries: {}", entries.len());
    for entry in &entries {
        println!("  {:<24} {}", entry.word, entry.topic);
    }

    Ok(())
}
