//! Build pipeline for the driver project.
//!
//! Structure:
//! - `layout` - Project path resolution (source, include, lib, outputs)
//! - `platform` - Host platform rules (rpath, link compiler, dylib copy)
//! - `profile` - The two build profiles (debug, release)
//! - `sources` - Source discovery and object-file naming
//! - `command` - External tool invocation
//! - `compile` - Per-source compile phase
//! - `link` - Per-profile link phase
//! - `outputs` - Output directory reset and shared-library copy

pub mod command;
pub mod compile;
pub mod layout;
pub mod link;
pub mod outputs;
pub mod platform;
pub mod profile;
pub mod sources;

use anyhow::Result;
use clap::Subcommand;

use layout::Layout;
use platform::Platform;
use profile::Profile;

/// Build commands for the CLI.
#[derive(Subcommand)]
pub enum BuildCommands {
    /// Full pipeline: reset outputs, compile, link, copy libraries (macOS)
    All,
    /// Reset the debug and release output directories
    Clean,
    /// List discovered source files and their object files
    Sources,
}

/// Run the full pipeline: reset, compile, link, post-link copy.
///
/// Tool failures do not stop the pipeline; a broken compile shows up in
/// the compiler's own output and in the missing object file, nothing else.
pub fn build_all(layout: &Layout, platform: Platform) -> Result<()> {
    println!("=== Building {} ===", layout.project_name());
    println!("Platform: {platform:?}\n");

    clean(layout)?;

    let cpp_files = sources::discover(&layout.source_dir())?;
    if cpp_files.is_empty() {
        println!("No .cpp files in {}", layout.source_dir().display());
    }

    for profile in Profile::ALL {
        compile::run(layout, profile, &cpp_files)?;
    }

    for profile in Profile::ALL {
        link::run(layout, platform, profile, &cpp_files)?;
    }

    if platform.copies_shared_libraries() {
        outputs::copy_shared_libraries(layout, platform)?;
    }

    println!("\n=== Done ===");
    Ok(())
}

/// Reset both output directories without building anything.
pub fn clean(layout: &Layout) -> Result<()> {
    for profile in Profile::ALL {
        outputs::reset_dir(&layout.output_dir(profile))?;
    }
    Ok(())
}

/// Print discovered sources and the objects they will produce.
pub fn sources(layout: &Layout) -> Result<()> {
    let cpp_files = sources::discover(&layout.source_dir())?;
    println!("{} source file(s) in {}", cpp_files.len(), layout.source_dir().display());
    for cpp_file in &cpp_files {
        println!("  {} -> {}", cpp_file, sources::object_name(cpp_file));
    }
    Ok(())
}
