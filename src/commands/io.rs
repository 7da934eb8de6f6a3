//! Input and output helpers shared by the command handlers.

use crate::error::{ProdgenError, Result};
use crate::product::{PlatformSet, ProductRecord};
use serde::Serialize;
use std::io::Read;
use std::path::Path;

/// Read a response from `path`, or from stdin when absent.
pub(super) fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            ProdgenError::UserError(format!(
                "failed to read input file '{}': {}",
                path.display(),
                e
            ))
        }),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .map_err(|e| ProdgenError::UserError(format!("failed to read stdin: {}", e)))?;
            Ok(input)
        }
    }
}

/// Load the product file, or explain which command needs one.
pub(super) fn require_product(path: Option<&Path>, purpose: &str) -> Result<ProductRecord> {
    let path = path.ok_or_else(|| {
        ProdgenError::UserError(format!("--product is required for {}", purpose))
    })?;
    ProductRecord::load(path)
}

/// Platforms from `--platforms`, defaulting to the campaign set.
pub(super) fn platforms_or_default(names: &[String]) -> Result<PlatformSet> {
    if names.is_empty() {
        return Ok(PlatformSet::campaign_default());
    }
    PlatformSet::parse_list(&names.join(","))
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ProdgenError::UserError(format!("failed to serialize output: {}", e)))
}

pub(super) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", to_pretty_json(value)?);
    Ok(())
}

pub(super) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut content = to_pretty_json(value)?;
    content.push('\n');
    std::fs::write(path, content).map_err(|e| {
        ProdgenError::UserError(format!(
            "failed to write output file '{}': {}",
            path.display(),
            e
        ))
    })
}
