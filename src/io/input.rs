use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{RuleTables, TableFile};

/// Load rule tables from a JSON file; tables absent from the file come from `fallback`
pub fn load_tables_file(path: &Path, fallback: &RuleTables) -> Result<RuleTables> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    parse_tables_json(&content, fallback)
}

/// Parse a JSON table file string
pub fn parse_tables_json(json: &str, fallback: &RuleTables) -> Result<RuleTables> {
    let file: TableFile = serde_json::from_str(json).context("Failed to parse table JSON")?;
    file.into_tables(fallback).context("Invalid rule table")
}

/// Read the text to rewrite: an inline argument, a file, or stdin, in that order
pub fn read_input_text(inline: Option<&str>, path: Option<&Path>) -> Result<Vec<u8>> {
    if let Some(text) = inline {
        return Ok(text.as_bytes().to_vec());
    }
    if let Some(path) = path {
        return std::fs::read(path).with_context(|| format!("Failed to read file: {:?}", path));
    }

    let mut buffer = Vec::new();
    std::io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read stdin")?;
    Ok(buffer)
}
