//! # Driver Build Orchestrator
//!
//! Compile-and-link pipeline for Saleae analyzer driver projects.
//!
//! ## Usage
//!
//! ```bash
//! driver-build            # Full pipeline: reset + compile + link (+ dylib copy on macOS)
//! driver-build all        # Same as above
//! driver-build clean      # Reset the debug/ and release/ output directories
//! driver-build sources    # List discovered sources and their object files
//! ```
//!
//! The project layout is fixed: `source/*.cpp` under the project root,
//! `../include` and `../lib` beside it, outputs in `debug/` and `release/`.

use anyhow::Result;
use clap::Parser;

mod builder;

#[derive(Parser)]
#[command(name = "driver-build", about = "Compile-and-link orchestrator for analyzer driver projects")]
struct Cli {
    /// Project root directory (contains source/, gains debug/ and release/)
    #[arg(long, default_value = ".", global = true)]
    root: std::path::PathBuf,

    #[command(subcommand)]
    command: Option<builder::BuildCommands>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let layout = builder::layout::Layout::resolve(&cli.root)?;
    let platform = builder::platform::Platform::detect();

    // Bare invocation runs the full pipeline.
    match cli.command.unwrap_or(builder::BuildCommands::All) {
        builder::BuildCommands::All => builder::build_all(&layout, platform)?,
        builder::BuildCommands::Clean => builder::clean(&layout)?,
        builder::BuildCommands::Sources => builder::sources(&layout)?,
    }

    Ok(())
}
