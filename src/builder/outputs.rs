//! Output directory reset and post-link shared-library copy.

use anyhow::{Context, Result};
use std::path::Path;

use crate::builder::layout::Layout;
use crate::builder::platform::Platform;
use crate::builder::profile::Profile;

/// Ensure `dir` exists and contains no files.
///
/// Every file directly inside is removed; subdirectories are left alone
/// (no recursion). An already-empty directory is fine. Filesystem errors
/// are fatal, there is no recovery path.
pub fn reset_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create output directory: {}", dir.display()))?;
        return Ok(());
    }

    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Cannot list output directory: {}", dir.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("Cannot read entry in {}", dir.display()))?;
        if entry.file_type()?.is_dir() {
            continue;
        }
        std::fs::remove_file(entry.path())
            .with_context(|| format!("Cannot remove stale file: {}", entry.path().display()))?;
    }
    Ok(())
}

/// Copy every shared library from the SDK lib directory into both output
/// directories. Darwin only; on Linux the rpath embedded at link time
/// does the job instead.
pub fn copy_shared_libraries(layout: &Layout, platform: Platform) -> Result<()> {
    println!("=== Copying shared libraries ===");

    let lib_dir = layout.lib_dir();
    let extension = platform.shared_library_extension();

    let entries = std::fs::read_dir(&lib_dir)
        .with_context(|| format!("Cannot list lib directory: {}", lib_dir.display()))?;

    let mut libs = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Cannot read entry in {}", lib_dir.display()))?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) == Some(extension) && entry.file_type()?.is_file() {
            libs.push(path);
        }
    }

    for profile in Profile::ALL {
        let out = layout.output_dir(profile);
        for lib in &libs {
            let name = lib
                .file_name()
                .with_context(|| format!("Library path has no file name: {}", lib.display()))?;
            let dest = out.join(name);
            std::fs::copy(lib, &dest)
                .with_context(|| format!("Cannot copy {} to {}", lib.display(), dest.display()))?;
            println!("  Copied: {} -> {}", lib.display(), dest.display());
        }
    }

    Ok(())
}
