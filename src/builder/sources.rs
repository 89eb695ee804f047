//! Source discovery and object-file naming.

use anyhow::{Context, Result};
use std::path::Path;

/// List the `.cpp` files directly inside `source_dir`.
///
/// Non-recursive; returns bare filenames in directory-enumeration order.
/// The same list drives both the compile and link phases, so object
/// ordering stays consistent within a run.
pub fn discover(source_dir: &Path) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(source_dir)
        .with_context(|| format!("Cannot list source directory: {}", source_dir.display()))?;

    let mut cpp_files = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Cannot read entry in {}", source_dir.display()))?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if name.ends_with(".cpp") {
                cpp_files.push(name.to_string());
            }
        }
    }
    Ok(cpp_files)
}

/// Object filename for a source file: only the trailing `.cpp` suffix is
/// replaced, once.
pub fn object_name(cpp_file: &str) -> String {
    match cpp_file.strip_suffix(".cpp") {
        Some(stem) => format!("{stem}.o"),
        None => cpp_file.to_string(),
    }
}
